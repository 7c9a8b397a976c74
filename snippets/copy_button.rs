use mono_ui::components::feedback::{CopyButton, CopyEvent};

let copy = cx.new(|_| CopyButton::new("copy-install", "cargo add mono-ui"));

cx.subscribe(&copy, |_this, _copy, event: &CopyEvent, _cx| {
    if let CopyEvent::Failed(reason) = event {
        tracing::warn!(reason = %reason, "Copy failed");
    }
})
.detach();
