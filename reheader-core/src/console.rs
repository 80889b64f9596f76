/// Target hardware for a cartridge, as recorded in the game database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameConsole {
    /// Steepler Dendy (Famicom clone, PAL timings)
    Dendy,
    /// Nintendo Famicom
    Famicom,
    /// Nintendo Entertainment System, NTSC regions
    NesNtsc,
    /// Nintendo Entertainment System, PAL regions
    NesPal,
    /// Nintendo PlayChoice-10 arcade cabinet
    Playchoice,
    /// Nintendo Vs. System arcade board
    VsSystem,
    /// Unknown or unspecified hardware
    None,
}

impl GameConsole {
    /// Parse the console code used by the database. Unrecognized codes map
    /// to [`GameConsole::None`] rather than failing.
    pub fn from_code(code: &str) -> Self {
        match code {
            "Dendy" => Self::Dendy,
            "Famicom" => Self::Famicom,
            "NesNtsc" => Self::NesNtsc,
            "NesPal" => Self::NesPal,
            "Playchoice" => Self::Playchoice,
            "VsSystem" => Self::VsSystem,
            _ => Self::None,
        }
    }

    /// Returns the full name of this console.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dendy => "Steepler Dendy",
            Self::Famicom => "Nintendo Famicom",
            Self::NesNtsc => "Nintendo Entertainment System (NTSC)",
            Self::NesPal => "Nintendo Entertainment System (PAL)",
            Self::Playchoice => "Nintendo PlayChoice-10",
            Self::VsSystem => "Nintendo Vs. System",
            Self::None => "UNKNOWN",
        }
    }

    /// True for consoles running at PAL (50 Hz) timings.
    pub fn is_pal(&self) -> bool {
        matches!(self, Self::Dendy | Self::NesPal)
    }
}

impl std::fmt::Display for GameConsole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Nametable mirroring topology of a cartridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    /// Four-screen VRAM on the cartridge
    FourScreen,
    /// Recorded in the database but not one of the fixed topologies
    Unknown,
    /// Unspecified
    None,
}

impl Mirroring {
    /// Parse the single-letter mirroring code used by the database.
    /// Unrecognized codes map to [`Mirroring::None`] rather than failing.
    pub fn from_code(code: &str) -> Self {
        match code {
            "h" => Self::Horizontal,
            "v" => Self::Vertical,
            "4" => Self::FourScreen,
            "a" => Self::Unknown,
            _ => Self::None,
        }
    }

    /// Returns the full name of this mirroring mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Horizontal => "Horizontal",
            Self::Vertical => "Vertical",
            Self::FourScreen => "Four-Screen VRAM",
            Self::Unknown => "A (Unknown)",
            Self::None => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Mirroring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_from_code() {
        assert_eq!(GameConsole::from_code("Dendy"), GameConsole::Dendy);
        assert_eq!(GameConsole::from_code("VsSystem"), GameConsole::VsSystem);
        assert_eq!(GameConsole::from_code("NesNtsc"), GameConsole::NesNtsc);
        // Unknown codes are total: they fall back to None
        assert_eq!(GameConsole::from_code("Atari2600"), GameConsole::None);
        assert_eq!(GameConsole::from_code(""), GameConsole::None);
    }

    #[test]
    fn test_console_pal_detection() {
        assert!(GameConsole::Dendy.is_pal());
        assert!(GameConsole::NesPal.is_pal());
        assert!(!GameConsole::Famicom.is_pal());
        assert!(!GameConsole::NesNtsc.is_pal());
        assert!(!GameConsole::None.is_pal());
    }

    #[test]
    fn test_mirroring_from_code() {
        assert_eq!(Mirroring::from_code("h"), Mirroring::Horizontal);
        assert_eq!(Mirroring::from_code("v"), Mirroring::Vertical);
        assert_eq!(Mirroring::from_code("4"), Mirroring::FourScreen);
        assert_eq!(Mirroring::from_code("a"), Mirroring::Unknown);
        assert_eq!(Mirroring::from_code("x"), Mirroring::None);
        assert_eq!(Mirroring::from_code(""), Mirroring::None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(GameConsole::Playchoice.to_string(), "Nintendo PlayChoice-10");
        assert_eq!(Mirroring::FourScreen.to_string(), "Four-Screen VRAM");
    }
}
