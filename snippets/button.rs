use mono_ui::components::primitives::{Button, ButtonVariant};
use mono_ui::controls::variant::{Intensity, Size, Tint};

Button::new("save", "Save changes")
    .variant(ButtonVariant::Glass)
    .tint(Tint::Blue)
    .intensity(Intensity::Strong)
    .size(Size::Large)
    .on_click(|_, _window, _cx| tracing::info!("Saved"))
