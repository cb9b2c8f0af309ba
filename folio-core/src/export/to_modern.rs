use crate::export::theme::{Palette, Section, ThemeDescriptor, ThemeGenerator};
use crate::model::ThemeId;

pub static DESCRIPTOR: ThemeDescriptor = ThemeDescriptor {
    id: ThemeId::Modern,
    label: "Modern",
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
        background: "#ffffff",
        page: "bg-white text-slate-900",
        nav: "bg-white/80 border-b border-slate-200",
        heading: "text-slate-900",
        accent: "text-blue-600",
        muted: "text-slate-600",
        card: "bg-white border border-slate-200 shadow-sm",
        band: "bg-slate-50",
        chip: "bg-blue-50 text-blue-700",
        button: "bg-blue-600 text-white hover:bg-blue-500",
        ring: "ring-blue-500/30",
        link: "text-blue-600 hover:text-blue-800",
    },
};

pub struct ModernTheme;

impl ThemeGenerator for ModernTheme {
    fn descriptor(&self) -> &'static ThemeDescriptor {
        &DESCRIPTOR
    }
}
