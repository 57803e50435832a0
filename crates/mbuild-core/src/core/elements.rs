use phf::{Map, phf_map};

/// Atom type tag reserved for non-physical port markers.
pub const GHOST_ATOM_TYPE: &str = "G";

const DEFAULT_RADIUS: f64 = 1.5;
const DEFAULT_COLOR: [f32; 3] = [1.0, 0.08, 0.58];

// Van der Waals radii in Angstroms.
static VDW_RADII: Map<&'static str, f64> = phf_map! {
    "G" => 0.0,
    "H" => 1.20, "C" => 1.70, "N" => 1.55, "O" => 1.52, "F" => 1.47,
    "P" => 1.80, "S" => 1.80, "CL" => 1.75, "BR" => 1.85, "I" => 1.98,
    "SI" => 2.10, "B" => 1.92,
};

// CPK-style display colors.
static COLORS: Map<&'static str, [f32; 3]> = phf_map! {
    "G" => [0.5, 0.5, 0.5],
    "H" => [1.0, 1.0, 1.0], "C" => [0.2, 0.2, 0.2], "N" => [0.19, 0.31, 0.97],
    "O" => [1.0, 0.05, 0.05], "F" => [0.56, 0.88, 0.31], "P" => [1.0, 0.5, 0.0],
    "S" => [1.0, 1.0, 0.19], "CL" => [0.12, 0.94, 0.12], "BR" => [0.65, 0.16, 0.16],
    "I" => [0.58, 0.0, 0.58], "SI" => [0.94, 0.78, 0.63], "B" => [1.0, 0.71, 0.71],
};

fn normalize(atom_type: &str) -> String {
    atom_type.trim().to_ascii_uppercase()
}

pub fn is_ghost(atom_type: &str) -> bool {
    atom_type == GHOST_ATOM_TYPE
}

pub fn vdw_radius(atom_type: &str) -> f64 {
    VDW_RADII
        .get(normalize(atom_type).as_str())
        .copied()
        .unwrap_or(DEFAULT_RADIUS)
}

pub fn display_color(atom_type: &str) -> [f32; 3] {
    COLORS
        .get(normalize(atom_type).as_str())
        .copied()
        .unwrap_or(DEFAULT_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_have_tabulated_radii() {
        assert_eq!(vdw_radius("C"), 1.70);
        assert_eq!(vdw_radius("H"), 1.20);
        assert_eq!(vdw_radius("G"), 0.0);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(vdw_radius("cl"), vdw_radius("Cl"));
        assert_eq!(display_color("o"), [1.0, 0.05, 0.05]);
    }

    #[test]
    fn unknown_types_fall_back_to_defaults() {
        assert_eq!(vdw_radius("Xx"), DEFAULT_RADIUS);
        assert_eq!(display_color("Xx"), DEFAULT_COLOR);
    }

    #[test]
    fn only_exact_ghost_tag_is_ghost() {
        assert!(is_ghost("G"));
        assert!(!is_ghost("g"));
        assert!(!is_ghost("C"));
    }
}
