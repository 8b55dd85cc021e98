//! Static lab content: wings, the items installed in them and their skins.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkinDef {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemDef {
    pub id: &'static str,
    pub name: &'static str,
    pub skins: &'static [SkinDef],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WingDef {
    pub key: &'static str,
    pub wing_name: &'static str,
    /// Star count at which the fog over this wing lifts.
    pub unlock_stars: u32,
    pub items: &'static [ItemDef],
}

const TECH_NEON: SkinDef = SkinDef { id: "tech_neon", name: "Tech Neon" };
const CLASSIC_BRASS: SkinDef = SkinDef { id: "classic_brass", name: "Latão Clássico" };
const ORGANIC_MOSS: SkinDef = SkinDef { id: "organic_moss", name: "Musgo Orgânico" };
const CRYSTAL_FROST: SkinDef = SkinDef { id: "crystal_frost", name: "Cristal Gélido" };

pub static WING_DEFS: &[WingDef] = &[
    WingDef {
        key: "fusion_bay",
        wing_name: "Baía de Fusão",
        unlock_stars: 10,
        items: &[
            ItemDef {
                id: "mesa_principal",
                name: "Mesa Principal",
                skins: &[TECH_NEON, CLASSIC_BRASS],
            },
            ItemDef {
                id: "acelerador_quantico",
                name: "Acelerador Quântico",
                skins: &[TECH_NEON, CLASSIC_BRASS, CRYSTAL_FROST],
            },
        ],
    },
    WingDef {
        key: "astro_garden",
        wing_name: "Jardim Astral",
        unlock_stars: 15,
        items: &[
            ItemDef {
                id: "estufa_astro",
                name: "Estufa Astral",
                skins: &[ORGANIC_MOSS, TECH_NEON],
            },
            ItemDef {
                id: "telescopio",
                name: "Telescópio",
                skins: &[CLASSIC_BRASS, CRYSTAL_FROST],
            },
        ],
    },
    WingDef {
        key: "cryo_vault",
        wing_name: "Cofre Criogênico",
        unlock_stars: 40,
        items: &[ItemDef {
            id: "camara_fria",
            name: "Câmara Fria",
            skins: &[CRYSTAL_FROST, TECH_NEON],
        }],
    },
];

pub fn wing_def(key: &str) -> Option<&'static WingDef> {
    WING_DEFS.iter().find(|w| w.key == key)
}

/// Finds an item and the wing it belongs to.
pub fn item_def(item_id: &str) -> Option<(&'static WingDef, &'static ItemDef)> {
    WING_DEFS
        .iter()
        .find_map(|w| w.items.iter().find(|i| i.id == item_id).map(|i| (w, i)))
}

impl ItemDef {
    pub fn has_skin(&self, skin_id: &str) -> bool {
        self.skins.iter().any(|s| s.id == skin_id)
    }
}

/// DOM id of a wing's panel: `astro_garden` -> `astro-garden`.
pub fn wing_element_id(key: &str) -> String {
    key.replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wing_keys_are_unique() {
        for (i, a) in WING_DEFS.iter().enumerate() {
            for b in &WING_DEFS[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn item_lookup_reports_owning_wing() {
        let (wing, item) = item_def("acelerador_quantico").unwrap();
        assert_eq!(wing.key, "fusion_bay");
        assert!(item.has_skin("tech_neon"));
        assert!(!item.has_skin("organic_moss"));
        assert!(item_def("nope").is_none());
    }

    #[test]
    fn element_id_replaces_underscores() {
        assert_eq!(wing_element_id("astro_garden"), "astro-garden");
        assert_eq!(wing_element_id("fusion_bay"), "fusion-bay");
    }

    #[test]
    fn every_item_offers_a_skin() {
        for wing in WING_DEFS {
            for item in wing.items {
                assert!(!item.skins.is_empty(), "{} has no skins", item.id);
            }
        }
    }
}
