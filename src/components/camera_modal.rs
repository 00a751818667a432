//! Camera Modal
//!
//! Live camera preview for scanning a product barcode. The device stream is
//! held by a `CameraSession`, so it is released on capture, on close, and
//! when the modal is torn down.

use leptos::html::Video;
use leptos::prelude::*;
use leptos::task::spawn_local;
use pantry_core::camera::{CameraSession, MediaSource};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::commands;
use crate::components::Modal;
use crate::context::AppContext;

/// Browser `MediaStream` as a releasable source
pub struct BrowserStream(web_sys::MediaStream);

impl MediaSource for BrowserStream {
    fn stop_tracks(&mut self) {
        for track in self.0.get_tracks().iter() {
            track.unchecked_into::<web_sys::MediaStreamTrack>().stop();
        }
    }
}

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Rear camera when the device has one
async fn request_camera() -> Result<web_sys::MediaStream, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let devices = window.navigator().media_devices().map_err(js_err)?;

    let video = js_sys::Object::new();
    js_sys::Reflect::set(&video, &"facingMode".into(), &"environment".into()).map_err(js_err)?;
    let constraints = web_sys::MediaStreamConstraints::new();
    constraints.set_video(&video.into());

    let promise = devices.get_user_media_with_constraints(&constraints).map_err(js_err)?;
    let stream = JsFuture::from(promise).await.map_err(js_err)?;
    Ok(stream.unchecked_into())
}

#[component]
pub fn CameraModal(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let video_ref = NodeRef::<Video>::new();
    let session = StoredValue::new_local(None::<CameraSession<BrowserStream>>);

    let release = move || {
        session.update_value(|s| {
            if let Some(s) = s.take() {
                s.close();
            }
        });
    };

    Effect::new(move |_| {
        if !open.get() {
            release();
            return;
        }
        spawn_local(async move {
            match request_camera().await {
                Ok(stream) => {
                    let opened = CameraSession::open(BrowserStream(stream));
                    // closed while the permission prompt was up
                    if !open.get_untracked() {
                        opened.close();
                        return;
                    }
                    if let (Some(video), Some(stream)) = (video_ref.get_untracked(), opened.stream()) {
                        video.set_src_object(Some(&stream.0));
                    }
                    session.set_value(Some(opened));
                }
                Err(e) => {
                    log::error!("[Camera] Error accessing camera: {}", e);
                    set_open.set(false);
                    commands::alert("Cannot access camera. Please ensure camera permissions are granted.");
                }
            }
        });
    });

    on_cleanup(release);

    let capture = move |_: web_sys::MouseEvent| {
        let Some(active) = session.try_update_value(|s| s.take()).flatten() else {
            return;
        };
        let scan = active.capture();
        log::info!("[Camera] Scanned barcode {}", scan.barcode);
        set_open.set(false);
        ctx.open_add_item(Some(scan));
    };

    view! {
        <Modal title="Scan Barcode" open=open on_close=move |_| set_open.set(false)>
            <div class="text-center">
                <video node_ref=video_ref class="w-100 rounded" autoplay=true muted=true></video>
                <p class="text-muted small mt-2">"Point the camera at the product barcode."</p>
                <button class="btn btn-primary" on:click=capture>
                    <i class="fas fa-camera"></i>
                    " Capture"
                </button>
            </div>
        </Modal>
    }
}
