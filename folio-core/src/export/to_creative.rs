use crate::export::theme::{Palette, Section, ThemeDescriptor, ThemeGenerator};
use crate::model::ThemeId;

pub static DESCRIPTOR: ThemeDescriptor = ThemeDescriptor {
    id: ThemeId::Creative,
    label: "Creative",
    tagline: "Your bio",
    sections: &[
        Section::Profile,
        Section::Projects,
        Section::About,
        Section::Experience,
        Section::Skills,
        Section::Contact,
    ],
    palette: Palette {
        background: "#fff7ed",
        page: "bg-orange-50 text-stone-900",
        nav: "bg-orange-50/80 border-b border-orange-200",
        heading: "bg-clip-text text-transparent bg-gradient-to-r from-rose-500 via-orange-500 to-amber-400",
        accent: "text-rose-500",
        muted: "text-stone-600",
        card: "bg-white rounded-2xl shadow-lg shadow-orange-200/50 rotate-[-0.5deg]",
        band: "bg-rose-50",
        chip: "bg-gradient-to-r from-rose-400 to-orange-400 text-white",
        button: "bg-rose-500 text-white hover:bg-rose-400",
        ring: "ring-rose-400/50",
        link: "text-rose-600 hover:text-orange-500",
    },
};

pub struct CreativeTheme;

impl ThemeGenerator for CreativeTheme {
    fn descriptor(&self) -> &'static ThemeDescriptor {
        &DESCRIPTOR
    }
}
