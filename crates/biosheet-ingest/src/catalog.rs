//! Category profiles
//!
//! Everything that differs between categories lives here as static data:
//! the entity names, the query templates, the KEGG compound ids and the
//! fallback tables used when the live databases have nothing to say.
//! Templates use a single `{name}` placeholder.

use biosheet_common::{Category, RecordField};

/// Static lookup table keyed by entity name, matched case-insensitively
pub type Table = &'static [(&'static str, &'static str)];

/// Field filled from a static table when still empty after the lookups
#[derive(Debug, Clone, Copy)]
pub struct Fallback {
    pub field: RecordField,
    pub table: Table,
}

/// Static configuration driving the fetcher for one category
#[derive(Debug, Clone, Copy)]
pub struct CategoryProfile {
    pub category: Category,
    pub names: &'static [&'static str],
    /// Maximum protein hits requested; only the first is used
    pub protein_limit: usize,
    pub protein_query: &'static str,
    pub literature_query: &'static str,
    pub pathway_phrase: &'static str,
    /// Consulted when every pathway strategy comes back empty
    pub known_pathways: Table,
    /// KEGG compound ids, empty for categories without a compound lookup
    pub compound_ids: Table,
    pub fallback: Fallback,
}

impl CategoryProfile {
    pub fn protein_query(&self, name: &str) -> String {
        render(self.protein_query, name)
    }

    pub fn literature_query(&self, name: &str) -> String {
        render(self.literature_query, name)
    }

    pub fn pathway_phrase(&self, name: &str) -> String {
        render(self.pathway_phrase, name)
    }

    pub fn known_pathways(&self, name: &str) -> Option<&'static str> {
        lookup(self.known_pathways, name)
    }

    pub fn compound_id(&self, name: &str) -> Option<&'static str> {
        lookup(self.compound_ids, name)
    }

    pub fn fallback_value(&self, name: &str) -> Option<&'static str> {
        lookup(self.fallback.table, name)
    }
}

fn render(template: &str, name: &str) -> String {
    template.replace("{name}", name.trim())
}

/// Case-insensitive table lookup
pub fn lookup(table: Table, name: &str) -> Option<&'static str> {
    let name = name.trim();
    table
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| *value)
}

/// Profile for a category
pub fn profile(category: Category) -> &'static CategoryProfile {
    match category {
        Category::Hormones => &HORMONES,
        Category::Enzymes => &ENZYMES,
        Category::AminoAcids => &AMINO_ACIDS,
        Category::Cells => &CELLS,
        Category::ForeignAminoAcids => &FOREIGN_AMINO_ACIDS,
    }
}

// ============================================================================
// Hormones
// ============================================================================

static HORMONES: CategoryProfile = CategoryProfile {
    category: Category::Hormones,
    names: &[
        "insulin",
        "glucagon",
        "testosterone",
        "estrogen",
        "cortisol",
        "thyroxine",
        "adrenaline",
        "noradrenaline",
        "melatonin",
        "growth hormone",
        "prolactin",
        "oxytocin",
        "vasopressin",
        "leptin",
        "ghrelin",
        "thyroid stimulating hormone",
        "follicle stimulating hormone",
        "luteinizing hormone",
        "adrenocorticotropic hormone",
        "aldosterone",
    ],
    protein_limit: 10,
    protein_query: "{name}",
    literature_query: "{name} hormone",
    pathway_phrase: "{name} function",
    known_pathways: HORMONE_PATHWAYS,
    compound_ids: &[],
    fallback: Fallback {
        field: RecordField::RelatedSystems,
        table: HORMONE_PATHWAYS,
    },
};

const HORMONE_PATHWAYS: Table = &[
    ("insulin", "Insulin receptor signalling cascade, Regulation of insulin secretion, Glucose metabolism"),
    ("glucagon", "Glucagon signaling in metabolic regulation, Gluconeogenesis, Glycogen breakdown"),
    ("testosterone", "Androgen biosynthesis, Metabolism of steroid hormones"),
    ("estrogen", "Estrogen biosynthesis, ESR-mediated signaling"),
    ("cortisol", "Glucocorticoid biosynthesis, Metabolism of steroid hormones"),
    ("thyroxine", "Thyroxine biosynthesis, Amine-derived hormones"),
    ("adrenaline", "Catecholamine biosynthesis, Adrenoceptors"),
    ("noradrenaline", "Catecholamine biosynthesis, Adrenoceptors"),
    ("melatonin", "Serotonin and melatonin biosynthesis, Amine-derived hormones"),
    ("growth hormone", "Growth hormone receptor signaling, Signaling by Interleukins"),
    ("prolactin", "Prolactin receptor signaling"),
    ("oxytocin", "Vasopressin-like receptors, Peptide ligand-binding receptors"),
    ("vasopressin", "Vasopressin regulates renal water homeostasis via Aquaporins, Vasopressin-like receptors"),
    ("leptin", "Signaling by Leptin"),
    ("ghrelin", "Synthesis, secretion, and deacylation of Ghrelin"),
    ("thyroid stimulating hormone", "Glycoprotein hormones, Hormone ligand-binding receptors"),
    ("follicle stimulating hormone", "Glycoprotein hormones, Hormone ligand-binding receptors"),
    ("luteinizing hormone", "Glycoprotein hormones, Hormone ligand-binding receptors"),
    ("adrenocorticotropic hormone", "Peptide hormone biosynthesis, Glucocorticoid biosynthesis"),
    ("aldosterone", "Mineralocorticoid biosynthesis, Metabolism of steroid hormones"),
];

// ============================================================================
// Enzymes
// ============================================================================

static ENZYMES: CategoryProfile = CategoryProfile {
    category: Category::Enzymes,
    names: &[
        "glucose-6-phosphate dehydrogenase",
        "hexokinase",
        "pyruvate kinase",
        "lactate dehydrogenase",
        "creatine kinase",
        "alkaline phosphatase",
        "aspartate aminotransferase",
        "alanine aminotransferase",
        "gamma-glutamyl transferase",
        "amylase",
        "lipase",
        "trypsin",
        "chymotrypsin",
        "pepsin",
        "carbonic anhydrase",
        "catalase",
        "superoxide dismutase",
        "glutathione peroxidase",
        "cytochrome oxidase",
        "ATP synthase",
        "DNA polymerase",
        "RNA polymerase",
        "helicase",
        "ligase",
        "kinase",
        "phosphatase",
        "protease",
        "nuclease",
    ],
    protein_limit: 10,
    protein_query: "{name}",
    literature_query: "{name} enzyme",
    pathway_phrase: "{name} function",
    known_pathways: ENZYME_PATHWAYS,
    compound_ids: &[],
    fallback: Fallback {
        field: RecordField::RelatedSystems,
        table: ENZYME_PATHWAYS,
    },
};

const ENZYME_PATHWAYS: Table = &[
    ("glucose-6-phosphate dehydrogenase", "Pentose phosphate pathway"),
    ("hexokinase", "Glycolysis, Glucose metabolism"),
    ("pyruvate kinase", "Glycolysis, Regulation of pyruvate metabolism"),
    ("lactate dehydrogenase", "Pyruvate metabolism"),
    ("creatine kinase", "Creatine metabolism"),
    ("alkaline phosphatase", "Post-translational modification: synthesis of GPI-anchored proteins"),
    ("aspartate aminotransferase", "Aspartate and asparagine metabolism, Gluconeogenesis"),
    ("alanine aminotransferase", "Alanine metabolism, Gluconeogenesis"),
    ("gamma-glutamyl transferase", "Glutathione synthesis and recycling"),
    ("amylase", "Digestion of dietary carbohydrate"),
    ("lipase", "Digestion of dietary lipid"),
    ("trypsin", "Activation of Matrix Metalloproteinases, Degradation of the extracellular matrix"),
    ("chymotrypsin", "Digestion and absorption"),
    ("pepsin", "Digestion and absorption"),
    ("carbonic anhydrase", "Reversible hydration of carbon dioxide, Erythrocytes take up carbon dioxide and release oxygen"),
    ("catalase", "Detoxification of Reactive Oxygen Species, Peroxisomal protein import"),
    ("superoxide dismutase", "Detoxification of Reactive Oxygen Species"),
    ("glutathione peroxidase", "Detoxification of Reactive Oxygen Species, Synthesis of 12-eicosatetraenoic acid derivatives"),
    ("cytochrome oxidase", "Respiratory electron transport, Complex IV assembly"),
    ("ATP synthase", "Formation of ATP by chemiosmotic coupling, Cristae formation"),
    ("DNA polymerase", "DNA Replication, DNA Repair"),
    ("RNA polymerase", "RNA Polymerase II Transcription, RNA Polymerase I Transcription"),
    ("helicase", "Unwinding of DNA, DNA strand elongation"),
    ("ligase", "DNA Repair, Protein ubiquitination"),
    ("kinase", "Signaling by Receptor Tyrosine Kinases, MAPK family signaling cascades"),
    ("phosphatase", "Dephosphorylation, Signal Transduction"),
    ("protease", "Metabolism of proteins, Degradation of the extracellular matrix"),
    ("nuclease", "DNA Repair, mRNA decay by 5' to 3' exoribonuclease"),
];

// ============================================================================
// Endogenous amino acids
// ============================================================================

static AMINO_ACIDS: CategoryProfile = CategoryProfile {
    category: Category::AminoAcids,
    names: &[
        "alanine",
        "arginine",
        "asparagine",
        "aspartic acid",
        "cysteine",
        "glutamic acid",
        "glutamine",
        "glycine",
        "histidine",
        "isoleucine",
        "leucine",
        "lysine",
        "methionine",
        "phenylalanine",
        "proline",
        "serine",
        "threonine",
        "tryptophan",
        "tyrosine",
        "valine",
    ],
    protein_limit: 5,
    protein_query: "{name} metabolism",
    literature_query: "{name} amino acid metabolism",
    pathway_phrase: "{name} metabolism",
    known_pathways: AMINO_ACID_PATHWAYS,
    compound_ids: AMINO_ACID_COMPOUNDS,
    fallback: Fallback {
        field: RecordField::RelatedSystems,
        table: AMINO_ACID_PATHWAYS,
    },
};

const AMINO_ACID_COMPOUNDS: Table = &[
    ("alanine", "C00041"),
    ("arginine", "C00062"),
    ("asparagine", "C00152"),
    ("aspartic acid", "C00049"),
    ("cysteine", "C00097"),
    ("glutamic acid", "C00025"),
    ("glutamine", "C00064"),
    ("glycine", "C00037"),
    ("histidine", "C00135"),
    ("isoleucine", "C00407"),
    ("leucine", "C00123"),
    ("lysine", "C00047"),
    ("methionine", "C00073"),
    ("phenylalanine", "C00079"),
    ("proline", "C00148"),
    ("serine", "C00065"),
    ("threonine", "C00188"),
    ("tryptophan", "C00078"),
    ("tyrosine", "C00082"),
    ("valine", "C00183"),
];

const AMINO_ACID_PATHWAYS: Table = &[
    ("alanine", "Alanine metabolism, Glucose-alanine cycle"),
    ("arginine", "Urea cycle, Arginine and proline metabolism"),
    ("asparagine", "Aspartate and asparagine metabolism"),
    ("aspartic acid", "Aspartate and asparagine metabolism, Urea cycle"),
    ("cysteine", "Sulfur amino acid metabolism, Cysteine formation from homocysteine"),
    ("glutamic acid", "Glutamate and glutamine metabolism"),
    ("glutamine", "Glutamate and glutamine metabolism"),
    ("glycine", "Glycine degradation, Serine biosynthesis"),
    ("histidine", "Histidine catabolism"),
    ("isoleucine", "Branched-chain amino acid catabolism"),
    ("leucine", "Branched-chain amino acid catabolism"),
    ("lysine", "Lysine catabolism"),
    ("methionine", "Methionine salvage pathway, Sulfur amino acid metabolism"),
    ("phenylalanine", "Phenylalanine metabolism, Phenylalanine and tyrosine metabolism"),
    ("proline", "Proline catabolism"),
    ("serine", "Serine biosynthesis"),
    ("threonine", "Threonine catabolism"),
    ("tryptophan", "Tryptophan catabolism, Serotonin and melatonin biosynthesis"),
    ("tyrosine", "Tyrosine catabolism, Catecholamine biosynthesis"),
    ("valine", "Branched-chain amino acid catabolism"),
];

// ============================================================================
// Human cells
// ============================================================================

static CELLS: CategoryProfile = CategoryProfile {
    category: Category::Cells,
    names: &[
        "hepatocyte",
        "neuron",
        "cardiomyocyte",
        "erythrocyte",
        "leukocyte",
        "fibroblast",
        "epithelial cell",
        "endothelial cell",
        "adipocyte",
        "osteocyte",
        "chondrocyte",
        "myocyte",
        "keratinocyte",
        "melanocyte",
        "enterocyte",
        "pneumocyte",
        "nephron",
        "beta cell",
        "alpha cell",
        "dendritic cell",
        "macrophage",
        "lymphocyte",
        "platelet",
        "stem cell",
    ],
    protein_limit: 10,
    protein_query: "{name} specific",
    literature_query: "{name} human cell",
    pathway_phrase: "{name} function",
    known_pathways: &[],
    compound_ids: &[],
    fallback: Fallback {
        field: RecordField::Location,
        table: CELL_TISSUES,
    },
};

const CELL_TISSUES: Table = &[
    ("hepatocyte", "Liver"),
    ("neuron", "Brain, Nervous system"),
    ("cardiomyocyte", "Heart"),
    ("erythrocyte", "Blood"),
    ("leukocyte", "Blood, Immune system"),
    ("fibroblast", "Connective tissue"),
    ("epithelial cell", "Epithelial tissue"),
    ("endothelial cell", "Blood vessels"),
    ("adipocyte", "Adipose tissue"),
    ("osteocyte", "Bone"),
    ("chondrocyte", "Cartilage"),
    ("myocyte", "Muscle"),
    ("keratinocyte", "Skin"),
    ("melanocyte", "Skin"),
    ("enterocyte", "Intestine"),
    ("pneumocyte", "Lung"),
    ("nephron", "Kidney"),
    ("beta cell", "Pancreas"),
    ("alpha cell", "Pancreas"),
    ("dendritic cell", "Immune system"),
    ("macrophage", "Immune system"),
    ("lymphocyte", "Immune system"),
    ("platelet", "Blood"),
    ("stem cell", "Various tissues"),
];

// ============================================================================
// Foreign (non-standard) amino acids
// ============================================================================

static FOREIGN_AMINO_ACIDS: CategoryProfile = CategoryProfile {
    category: Category::ForeignAminoAcids,
    names: &[
        "selenocysteine",
        "pyrrolysine",
        "hydroxyproline",
        "hydroxylysine",
        "gamma-carboxyglutamic acid",
        "citrulline",
        "ornithine",
        "taurine",
        "beta-alanine",
        "gamma-aminobutyric acid",
        "dopamine",
        "serotonin",
        "histamine",
        "carnosine",
        "anserine",
        "homocysteine",
        "cystathionine",
        "sarcosine",
        "betaine",
        "creatine",
        "carnitine",
        "acetylcarnitine",
    ],
    protein_limit: 5,
    protein_query: "{name} metabolism",
    literature_query: "{name} non-standard amino acid",
    pathway_phrase: "{name} metabolism",
    known_pathways: &[],
    compound_ids: FOREIGN_AMINO_ACID_COMPOUNDS,
    fallback: Fallback {
        field: RecordField::Function,
        table: FOREIGN_AMINO_ACID_FUNCTIONS,
    },
};

const FOREIGN_AMINO_ACID_COMPOUNDS: Table = &[
    ("selenocysteine", "C00768"),
    ("pyrrolysine", "C16138"),
    ("hydroxyproline", "C01157"),
    ("hydroxylysine", "C00956"),
    ("gamma-carboxyglutamic acid", "C02051"),
    ("citrulline", "C00327"),
    ("ornithine", "C00077"),
    ("taurine", "C00245"),
    ("beta-alanine", "C00099"),
    ("gamma-aminobutyric acid", "C00334"),
    ("dopamine", "C03758"),
    ("serotonin", "C00780"),
    ("histamine", "C00388"),
    ("carnosine", "C00386"),
    ("anserine", "C01262"),
    ("homocysteine", "C00155"),
    ("cystathionine", "C02291"),
    ("sarcosine", "C00213"),
    ("betaine", "C00719"),
    ("creatine", "C00300"),
    ("carnitine", "C00318"),
    ("acetylcarnitine", "C02571"),
];

const FOREIGN_AMINO_ACID_FUNCTIONS: Table = &[
    ("selenocysteine", "Selenium-containing amino acid, antioxidant function"),
    ("pyrrolysine", "Rare amino acid found in archaea and bacteria"),
    ("hydroxyproline", "Modified proline, important in collagen structure"),
    ("hydroxylysine", "Modified lysine, important in collagen cross-linking"),
    ("gamma-carboxyglutamic acid", "Vitamin K-dependent modification, blood clotting"),
    ("citrulline", "Urea cycle intermediate, nitric oxide precursor"),
    ("ornithine", "Urea cycle intermediate, polyamine synthesis"),
    ("taurine", "Sulfonic acid derivative, bile acid conjugation"),
    ("beta-alanine", "Beta amino acid, carnosine synthesis"),
    ("gamma-aminobutyric acid", "Neurotransmitter, inhibitory function"),
    ("dopamine", "Neurotransmitter, reward and movement"),
    ("serotonin", "Neurotransmitter, mood and sleep regulation"),
    ("histamine", "Inflammatory mediator, gastric acid secretion"),
    ("carnosine", "Dipeptide, muscle buffering and antioxidant"),
    ("anserine", "Dipeptide, similar to carnosine"),
    ("homocysteine", "Methionine metabolism intermediate"),
    ("cystathionine", "Cysteine biosynthesis intermediate"),
    ("sarcosine", "Glycine metabolism intermediate"),
    ("betaine", "Methyl donor, osmolyte"),
    ("creatine", "Energy metabolism, muscle function"),
    ("carnitine", "Fatty acid transport, energy metabolism"),
    ("acetylcarnitine", "Carnitine derivative, energy metabolism"),
];
