use crate::export::theme::{Palette, Section, ThemeDescriptor, ThemeGenerator};
use crate::model::ThemeId;

pub static DESCRIPTOR: ThemeDescriptor = ThemeDescriptor {
    id: ThemeId::Galaxy,
    label: "Galaxy",
    tagline: "Build cosmic experiences.",
    sections: &[
        Section::Profile,
        Section::About,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ],
    palette: Palette {
        background: "#020617",
        page: "bg-slate-950 text-slate-100",
        nav: "bg-slate-950/70 border-b border-white/10",
        heading: "bg-clip-text text-transparent bg-gradient-to-r from-fuchsia-400 via-cyan-300 to-emerald-300",
        accent: "text-fuchsia-300",
        muted: "text-slate-300",
        card: "bg-white/5 border border-white/10",
        band: "bg-white/5",
        chip: "bg-white/5 border border-white/10 text-slate-100",
        button: "bg-fuchsia-500 text-black hover:bg-fuchsia-400",
        ring: "ring-fuchsia-500/40",
        link: "text-cyan-300 hover:text-cyan-100",
    },
};

pub struct GalaxyTheme;

impl ThemeGenerator for GalaxyTheme {
    fn descriptor(&self) -> &'static ThemeDescriptor {
        &DESCRIPTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PortfolioDraft;

    #[test]
    fn test_galaxy_tagline_and_palette() {
        let files = GalaxyTheme.generate(&PortfolioDraft::default()).unwrap();
        let page = &files["app/page.tsx"];
        assert!(page.contains("__html: `Build cosmic experiences.`"));
        assert!(page.contains("from-fuchsia-400 via-cyan-300 to-emerald-300"));
        assert!(files["app/globals.css"].contains("background: #020617;"));
    }

    #[test]
    fn test_galaxy_manifest_name() {
        let draft = PortfolioDraft {
            name: Some("Alex  Galaxy".to_string()),
            ..PortfolioDraft::default()
        };
        let files = GalaxyTheme.generate(&draft).unwrap();
        assert!(files["package.json"].contains("\"name\": \"alex-galaxy-nocodefolio-galaxy\""));
    }
}
