//! Use Cases & Disposal Options
//!
//! Fixed suggestion lists shown from the item actions.

/// Products with their own use-case list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseCases {
    OrganicApples,
    FreshBananas,
    WholeMilk,
    General,
}

impl UseCases {
    pub fn for_product(product_name: &str) -> Self {
        match product_name.trim() {
            "Organic Apples" => UseCases::OrganicApples,
            "Fresh Bananas" => UseCases::FreshBananas,
            "Whole Milk" => UseCases::WholeMilk,
            _ => UseCases::General,
        }
    }

    pub fn ideas(&self) -> &'static [&'static str] {
        match self {
            UseCases::OrganicApples => &["Make apple sauce", "Bake apple pie", "Add to salad", "Make apple chips"],
            UseCases::FreshBananas => &["Make banana bread", "Smoothie ingredient", "Freeze for later", "Make banana chips"],
            UseCases::WholeMilk => &["Make cheese", "Bake with it", "Make yogurt", "Coffee creamer"],
            UseCases::General => &["Use in cooking", "Share with neighbors", "Food bank donation", "Compost if organic"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisposalClass {
    Organic,
    Electronics,
    Standard,
}

impl DisposalClass {
    pub fn for_category(category: &str) -> Self {
        match category.trim().to_ascii_lowercase().as_str() {
            "fruit" | "vegetable" | "dairy" | "meat" | "bakery" | "organic" => DisposalClass::Organic,
            "electronics" => DisposalClass::Electronics,
            _ => DisposalClass::Standard,
        }
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self {
            DisposalClass::Organic => &["Compost", "Food bank donation", "Animal feed", "Sell at discount"],
            DisposalClass::Electronics => &["Recycle at center", "Donate to charity", "Sell online", "Manufacturer takeback"],
            DisposalClass::Standard => &["Standard waste", "Recycle if possible", "Donate if usable", "Proper disposal"],
        }
    }
}

pub const DISPOSAL_NOTE: &str = "Please consider eco-friendly disposal methods.";

/// Confirmation text for a paid warranty extension
pub fn warranty_prompt(product_name: &str, cost: f64) -> String {
    format!("Extend warranty for {} for ${}?", product_name, cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_use_cases_fall_back() {
        assert_eq!(UseCases::for_product("Whole Milk").ideas()[0], "Make cheese");
        assert_eq!(UseCases::for_product("Canned Beans"), UseCases::General);
        assert_eq!(UseCases::General.ideas().len(), 4);
    }

    #[test]
    fn test_disposal_by_category() {
        assert_eq!(DisposalClass::for_category("Dairy"), DisposalClass::Organic);
        assert_eq!(DisposalClass::for_category("Electronics").options()[0], "Recycle at center");
        assert_eq!(DisposalClass::for_category("N/A"), DisposalClass::Standard);
    }

    #[test]
    fn test_warranty_prompt() {
        assert_eq!(warranty_prompt("Blender", 19.99), "Extend warranty for Blender for $19.99?");
    }
}
