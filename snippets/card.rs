use mono_ui::components::primitives::Card;
use mono_ui::controls::variant::{Intensity, Tint};

Card::new()
    .title("Glass card")
    .description("Frosted surface over any backdrop.")
    .tint(Tint::Violet)
    .intensity(Intensity::Subtle)
    .child(div().child("Content"))
