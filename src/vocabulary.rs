use std::collections::HashMap;

/// The feature columns of the trained model, in training order.
///
/// This list must stay byte-for-byte identical to the column order used when
/// the classifier was trained: position i in this list is feature i of the
/// model's input vector. It knowingly carries two defects inherited from the
/// training data: `fluid_overload` appears twice (indices 45 and 117) and
/// index 50 is a corrupted column name (a stray filesystem path). Renaming,
/// deduplicating, or reordering any entry would silently misalign the encoded
/// features against the trained model, so the list is preserved as-is.
static SYMPTOM_NAMES: &[&str] = &[
    "itching", "skin_rash", "nodal_skin_eruptions", "continuous_sneezing", "shivering", "chills",
    "joint_pain", "stomach_pain", "acidity", "ulcers_on_tongue", "muscle_wasting", "vomiting",
    "burning_micturition", "spotting_urination", "fatigue", "weight_gain", "anxiety",
    "cold_hands_and_feets", "mood_swings", "weight_loss", "restlessness", "lethargy",
    "patches_in_throat", "irregular_sugar_level", "cough", "high_fever", "sunken_eyes",
    "breathlessness", "sweating", "dehydration", "indigestion", "headache", "yellowish_skin",
    "dark_urine", "nausea", "loss_of_appetite", "pain_behind_the_eyes", "back_pain",
    "constipation", "abdominal_pain", "diarrhoea", "mild_fever", "yellow_urine",
    "yellowing_of_eyes", "acute_liver_failure", "fluid_overload", "swelling_of_stomach",
    "swelled_lymph_nodes", "malaise", "blurred_and_distorted_vision",
    "c:\\$Recycle.Bin\\S-1-5-21-3830242582-982210628-1531626654-1001\\$R63E9MY.pkl",
    "throat_irritation", "redness_of_eyes", "sinus_pressure", "runny_nose", "congestion",
    "chest_pain", "weakness_in_limbs", "fast_heart_rate", "pain_during_bowel_movements",
    "pain_in_anal_region", "bloody_stool", "irritation_in_anus", "neck_pain", "dizziness",
    "cramps", "bruising", "obesity", "swollen_legs", "swollen_blood_vessels",
    "puffy_face_and_eyes", "enlarged_thyroid", "brittle_nails", "swollen_extremeties",
    "excessive_hunger", "extra_marital_contacts", "drying_and_tingling_lips", "slurred_speech",
    "knee_pain", "hip_joint_pain", "muscle_weakness", "stiff_neck", "swelling_joints",
    "movement_stiffness", "spinning_movements", "loss_of_balance", "unsteadiness",
    "weakness_of_one_body_side", "loss_of_smell", "bladder_discomfort", "foul_smell_of_urine",
    "continuous_feel_of_urine", "passage_of_gases", "internal_itching", "toxic_look_(typhos)",
    "depression", "irritability", "muscle_pain", "altered_sensorium", "red_spots_over_body",
    "belly_pain", "abnormal_menstruation", "dischromic_patches", "watering_from_eyes",
    "increased_appetite", "polyuria", "family_history", "mucoid_sputum", "rusty_sputum",
    "lack_of_concentration", "visual_disturbances", "receiving_blood_transfusion",
    "receiving_unsterile_injections", "coma", "stomach_bleeding", "distention_of_abdomen",
    "history_of_alcohol_consumption", "fluid_overload", "blood_in_sputum",
    "prominent_veins_on_calf", "palpitations", "painful_walking", "pus_filled_pimples",
    "blackheads", "scurring", "skin_peeling", "silver_like_dusting", "small_dents_in_nails",
    "inflammatory_nails", "blister", "red_sore_around_nose", "yellow_crust_ooze",
];

/// The ordered symptom vocabulary with a precomputed name-to-index map.
///
/// Lookups are case-sensitive exact matches. For the duplicated
/// `fluid_overload` column the first occurrence wins, matching the
/// first-match lookup the model was trained against.
#[derive(Debug, Clone)]
pub struct SymptomVocabulary {
    names: &'static [&'static str],
    index: HashMap<&'static str, usize>,
}

impl SymptomVocabulary {
    pub fn new() -> Self {
        let mut index = HashMap::with_capacity(SYMPTOM_NAMES.len());
        for (i, name) in SYMPTOM_NAMES.iter().enumerate() {
            index.entry(*name).or_insert(i);
        }
        Self {
            names: SYMPTOM_NAMES,
            index,
        }
    }

    /// Number of features the model expects.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Looks up the feature index of a symptom name, if it is known.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// The vocabulary in feature order.
    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }
}

impl Default for SymptomVocabulary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_size() {
        let vocab = SymptomVocabulary::new();
        assert_eq!(vocab.len(), 132);
        assert!(!vocab.is_empty());
    }

    #[test]
    fn test_index_order_matches_training_columns() {
        let vocab = SymptomVocabulary::new();
        assert_eq!(vocab.index_of("itching"), Some(0));
        assert_eq!(vocab.index_of("skin_rash"), Some(1));
        assert_eq!(vocab.index_of("yellow_crust_ooze"), Some(131));
    }

    #[test]
    fn test_duplicate_column_resolves_to_first_index() {
        let vocab = SymptomVocabulary::new();
        assert_eq!(vocab.names()[45], "fluid_overload");
        assert_eq!(vocab.names()[117], "fluid_overload");
        assert_eq!(vocab.index_of("fluid_overload"), Some(45));
    }

    #[test]
    fn test_corrupted_column_is_preserved() {
        let vocab = SymptomVocabulary::new();
        let corrupted = vocab.names()[50];
        assert!(corrupted.starts_with("c:\\"));
        assert_eq!(vocab.index_of(corrupted), Some(50));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let vocab = SymptomVocabulary::new();
        assert_eq!(vocab.index_of("Itching"), None);
        assert_eq!(vocab.index_of("ITCHING"), None);
        assert_eq!(vocab.index_of(" itching"), None);
    }

    #[test]
    fn test_unknown_name() {
        let vocab = SymptomVocabulary::new();
        assert_eq!(vocab.index_of("not_a_real_symptom"), None);
    }
}
