use crate::export::theme::{Palette, Section, ThemeDescriptor, ThemeGenerator};
use crate::model::ThemeId;

pub static DESCRIPTOR: ThemeDescriptor = ThemeDescriptor {
    id: ThemeId::Neon,
    label: "Neon",
    tagline: "Your bio",
    sections: &[
        Section::Profile,
        Section::About,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ],
    palette: Palette {
        background: "#000000",
        page: "bg-black text-cyan-100 selection:bg-cyan-400/20",
        nav: "bg-black/70 border-b border-cyan-400/20",
        heading: "text-cyan-100 drop-shadow-[0_0_12px_rgba(34,211,238,0.6)]",
        accent: "text-fuchsia-300",
        muted: "text-cyan-200/80",
        card: "bg-white/5 border border-white/10",
        band: "bg-white/5",
        chip: "bg-white/5 border border-white/10 text-cyan-100",
        button: "bg-cyan-500 text-black hover:bg-cyan-400",
        ring: "ring-cyan-400/40",
        link: "text-cyan-300 hover:text-cyan-100",
    },
};

pub struct NeonTheme;

impl ThemeGenerator for NeonTheme {
    fn descriptor(&self) -> &'static ThemeDescriptor {
        &DESCRIPTOR
    }
}
