#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelDef {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub id: &'static str,
    pub name: &'static str,
    pub labels: &'static [LabelDef],
}

const fn label(id: &'static str, name: &'static str) -> LabelDef {
    LabelDef { id, name }
}

const EXPLICIT_NUDITY: &[LabelDef] = &[
    label("nudity", "Nudity"),
    label("graphic_male_nudity", "Graphic Male Nudity"),
    label("graphic_female_nudity", "Graphic Female Nudity"),
    label("sexual_activity", "Sexual Activity"),
    label("illustrated_explicit_nudity", "Illustrated Explicit Nudity"),
    label("adult_toys", "Adult Toys"),
];
const SUGGESTIVE: &[LabelDef] = &[
    label("female_swimwear_or_underwear", "Female Swimwear Or Underwear"),
    label("male_swimwear_or_underwear", "Male Swimwear Or Underwear"),
    label("partial_nudity", "Partial Nudity"),
    label("barechested_male", "Barechested Male"),
    label("revealing_clothes", "Revealing Clothes"),
    label("sexual_situations", "Sexual Situations"),
];
const VIOLENCE: &[LabelDef] = &[
    label("graphic_violence_or_gore", "Graphic Violence Or Gore"),
    label("physical_violence", "Physical Violence"),
    label("weapon_violence", "Weapon Violence"),
    label("weapons", "Weapons"),
    label("self_injury", "Self Injury"),
];
const VISUALLY_DISTURBING: &[LabelDef] = &[
    label("emaciated_bodies", "Emaciated Bodies"),
    label("corpses", "Corpses"),
    label("hanging", "Hanging"),
    label("air_crash", "Air Crash"),
    label("explosions_or_blasts", "Explosions And Blasts"),
];
const RUDE_GESTURES: &[LabelDef] = &[label("middle_finger", "Middle Finger")];
const DRUGS: &[LabelDef] = &[
    label("drug_products", "Drug Products"),
    label("drug_use", "Drug Use"),
    label("pills", "Pills"),
    label("drug_paraphernalia", "Drug Paraphernalia"),
];
const TOBACCO: &[LabelDef] = &[
    label("tobacco_products", "Tobacco Products"),
    label("smoking", "Smoking"),
];
const ALCOHOL: &[LabelDef] = &[
    label("drinking", "Drinking"),
    label("alcoholic_beverages", "Alcoholic Beverages"),
];
const GAMBLING: &[LabelDef] = &[label("gambling", "Gambling")];
const HATE_SYMBOLS: &[LabelDef] = &[
    label("nazi_party", "Nazi Party"),
    label("white_supremacy", "White Supremacy"),
    label("extremist", "Extremist"),
];

const BUILTIN_TAXONOMY: &[CategoryDef] = &[
    CategoryDef {
        id: "explicit_nudity",
        name: "Explicit Nudity",
        labels: EXPLICIT_NUDITY,
    },
    CategoryDef {
        id: "suggestive",
        name: "Suggestive",
        labels: SUGGESTIVE,
    },
    CategoryDef {
        id: "violence",
        name: "Violence",
        labels: VIOLENCE,
    },
    CategoryDef {
        id: "visually_disturbing",
        name: "Visually Disturbing",
        labels: VISUALLY_DISTURBING,
    },
    CategoryDef {
        id: "rude_gestures",
        name: "Rude Gestures",
        labels: RUDE_GESTURES,
    },
    CategoryDef {
        id: "drugs",
        name: "Drugs",
        labels: DRUGS,
    },
    CategoryDef {
        id: "tobacco",
        name: "Tobacco",
        labels: TOBACCO,
    },
    CategoryDef {
        id: "alcohol",
        name: "Alcohol",
        labels: ALCOHOL,
    },
    CategoryDef {
        id: "gambling",
        name: "Gambling",
        labels: GAMBLING,
    },
    CategoryDef {
        id: "hate_symbols",
        name: "Hate Symbols",
        labels: HATE_SYMBOLS,
    },
];

pub fn builtin_taxonomy() -> &'static [CategoryDef] {
    BUILTIN_TAXONOMY
}

pub fn taxonomy_labels() -> impl Iterator<Item = (&'static CategoryDef, &'static LabelDef)> {
    BUILTIN_TAXONOMY
        .iter()
        .flat_map(|cat| cat.labels.iter().map(move |l| (cat, l)))
}
