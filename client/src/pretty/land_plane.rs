use std::fmt::{
    self,
    Display,
    Formatter,
};

use colored::Colorize;
use land_interface::state::land_plane::LandPlane;

use crate::logs::LogColor;

pub struct PrettyLandPlane<'a>(pub &'a LandPlane);

impl Display for PrettyLandPlane<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let plane = self.0;
        let version_color = match plane.is_initialized() {
            true => LogColor::Header,
            false => LogColor::Warning,
        };

        writeln!(
            f,
            "{} {}",
            "land_plane".color(LogColor::Debug),
            plane.version.to_string().color(version_color)
        )?;
        writeln!(
            f,
            "  {} ({}, {})",
            "last minted".color(LogColor::FadedGray),
            plane.last_minted_x,
            plane.last_minted_y
        )?;
        write!(f, "  {} {}", "depth".color(LogColor::FadedGray), plane.depth)
    }
}
