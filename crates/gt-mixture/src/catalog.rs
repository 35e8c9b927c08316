//! Built-in gas catalog with preset constants.
//!
//! Sutherland fits are the common literature values (reference viscosity in
//! poise at the listed reference temperature); specific heats are ideal-gas
//! values near room temperature.

use crate::species::SpeciesConstants;

/// Gases commonly found in exhaust and after-treatment systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownGas {
    /// Dry air (pseudo-pure)
    Air,
    /// Nitrogen (N₂)
    N2,
    /// Oxygen (O₂)
    O2,
    /// Carbon dioxide (CO₂)
    CO2,
    /// Carbon monoxide (CO)
    CO,
    /// Hydrogen (H₂)
    H2,
    /// Water vapor (H₂O)
    H2O,
    /// Ammonia (NH₃)
    NH3,
    /// Nitric oxide (NO)
    NO,
    /// Nitrous oxide (N₂O)
    N2O,
    /// Sulfur dioxide (SO₂)
    SO2,
    /// Methane (CH₄)
    CH4,
    /// Argon
    Ar,
    /// Helium
    He,
}

impl KnownGas {
    pub const ALL: [KnownGas; 14] = [
        KnownGas::Air,
        KnownGas::N2,
        KnownGas::O2,
        KnownGas::CO2,
        KnownGas::CO,
        KnownGas::H2,
        KnownGas::H2O,
        KnownGas::NH3,
        KnownGas::NO,
        KnownGas::N2O,
        KnownGas::SO2,
        KnownGas::CH4,
        KnownGas::Ar,
        KnownGas::He,
    ];

    /// Short formula-style identifier.
    pub fn id(self) -> &'static str {
        match self {
            KnownGas::Air => "Air",
            KnownGas::N2 => "N2",
            KnownGas::O2 => "O2",
            KnownGas::CO2 => "CO2",
            KnownGas::CO => "CO",
            KnownGas::H2 => "H2",
            KnownGas::H2O => "H2O",
            KnownGas::NH3 => "NH3",
            KnownGas::NO => "NO",
            KnownGas::N2O => "N2O",
            KnownGas::SO2 => "SO2",
            KnownGas::CH4 => "CH4",
            KnownGas::Ar => "Ar",
            KnownGas::He => "He",
        }
    }

    /// Preset constants: (MW [g/mol], T0 [K], C [K], μ0 [g/(cm·s)], cp [J/(g·K)]).
    fn table(self) -> (f64, f64, f64, f64, f64) {
        match self {
            KnownGas::Air => (28.964, 291.15, 120.0, 1.827e-4, 1.005),
            KnownGas::N2 => (28.014, 300.55, 111.0, 1.781e-4, 1.040),
            KnownGas::O2 => (31.998, 292.25, 127.0, 2.018e-4, 0.918),
            KnownGas::CO2 => (44.009, 293.15, 240.0, 1.480e-4, 0.844),
            KnownGas::CO => (28.010, 288.15, 118.0, 1.720e-4, 1.020),
            KnownGas::H2 => (2.016, 293.85, 72.0, 0.876e-4, 14.300),
            KnownGas::H2O => (18.015, 350.00, 1064.0, 1.120e-4, 1.996),
            KnownGas::NH3 => (17.031, 293.15, 370.0, 0.982e-4, 2.060),
            KnownGas::NO => (30.006, 273.15, 128.0, 1.790e-4, 0.995),
            KnownGas::N2O => (44.013, 273.15, 260.0, 1.350e-4, 0.880),
            KnownGas::SO2 => (64.066, 293.65, 416.0, 1.254e-4, 0.640),
            KnownGas::CH4 => (16.043, 273.15, 164.0, 1.030e-4, 2.220),
            KnownGas::Ar => (39.948, 273.15, 144.0, 2.125e-4, 0.520),
            KnownGas::He => (4.003, 273.15, 79.4, 1.870e-4, 5.193),
        }
    }

    /// Preset constants named after [`KnownGas::id`].
    pub fn constants(self) -> SpeciesConstants {
        let (mw, t0, c, mu0, cp) = self.table();
        SpeciesConstants::new(self.id(), mw, t0, c, mu0, cp)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasCatalogEntry {
    pub gas: KnownGas,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
}

impl GasCatalogEntry {
    pub fn canonical_id(&self) -> &'static str {
        self.gas.id()
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.canonical_id().to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }

    fn matches_exactly(&self, name: &str) -> bool {
        let name = name.trim();
        self.canonical_id().eq_ignore_ascii_case(name)
            || self.display_name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }
}

const GAS_CATALOG: [GasCatalogEntry; 14] = [
    GasCatalogEntry {
        gas: KnownGas::Air,
        display_name: "Air",
        aliases: &["atmosphere"],
    },
    GasCatalogEntry {
        gas: KnownGas::N2,
        display_name: "Nitrogen",
        aliases: &["nitrogen"],
    },
    GasCatalogEntry {
        gas: KnownGas::O2,
        display_name: "Oxygen",
        aliases: &["oxygen"],
    },
    GasCatalogEntry {
        gas: KnownGas::CO2,
        display_name: "Carbon Dioxide",
        aliases: &["carbon dioxide"],
    },
    GasCatalogEntry {
        gas: KnownGas::CO,
        display_name: "Carbon Monoxide",
        aliases: &["carbon monoxide"],
    },
    GasCatalogEntry {
        gas: KnownGas::H2,
        display_name: "Hydrogen",
        aliases: &["hydrogen"],
    },
    GasCatalogEntry {
        gas: KnownGas::H2O,
        display_name: "Water Vapor",
        aliases: &["water", "steam"],
    },
    GasCatalogEntry {
        gas: KnownGas::NH3,
        display_name: "Ammonia",
        aliases: &["ammonia"],
    },
    GasCatalogEntry {
        gas: KnownGas::NO,
        display_name: "Nitric Oxide",
        aliases: &["nitric oxide", "nitrogen monoxide"],
    },
    GasCatalogEntry {
        gas: KnownGas::N2O,
        display_name: "Nitrous Oxide",
        aliases: &["nitrous oxide"],
    },
    GasCatalogEntry {
        gas: KnownGas::SO2,
        display_name: "Sulfur Dioxide",
        aliases: &["sulfur dioxide"],
    },
    GasCatalogEntry {
        gas: KnownGas::CH4,
        display_name: "Methane",
        aliases: &["methane"],
    },
    GasCatalogEntry {
        gas: KnownGas::Ar,
        display_name: "Argon",
        aliases: &["argon"],
    },
    GasCatalogEntry {
        gas: KnownGas::He,
        display_name: "Helium",
        aliases: &["helium"],
    },
];

pub fn gas_catalog() -> &'static [GasCatalogEntry] {
    &GAS_CATALOG
}

/// Entries whose id, display name or aliases contain `query` (case-insensitive).
pub fn filter_catalog(query: &str) -> Vec<GasCatalogEntry> {
    GAS_CATALOG
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}

/// Exact (case-insensitive) lookup by id, display name or alias.
pub fn find_gas(name: &str) -> Option<KnownGas> {
    GAS_CATALOG
        .iter()
        .find(|entry| entry.matches_exactly(name))
        .map(|entry| entry.gas)
}
