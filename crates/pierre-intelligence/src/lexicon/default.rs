// ABOUTME: Built-in injury lexicon compiled into the binary
// ABOUTME: Gym-talk false positives, soreness phrases, pain vocabulary and body-part synonyms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{BodyPartEntry, ContextClues, DiscomfortTiers, InjuryTypeCategory, Lexicon};
use std::collections::BTreeMap;

fn terms(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| (*t).to_owned()).collect()
}

fn body_part(key: &str, primary: &[&str], synonyms: &[&str], regions: &[&str]) -> BodyPartEntry {
    BodyPartEntry {
        key: key.to_owned(),
        primary: terms(primary),
        synonyms: terms(synonyms),
        regions: terms(regions),
    }
}

fn injury_types(category: &str, list: &[&str]) -> InjuryTypeCategory {
    InjuryTypeCategory {
        category: category.to_owned(),
        terms: terms(list),
    }
}

fn mapping(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(from, to)| ((*from).to_owned(), (*to).to_owned()))
        .collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            false_positives: terms(&[
                "killed it",
                "killed that",
                "crushed it",
                "crushed that",
                "smashed it",
                "nailed it",
                "killing it",
                "destroyed",
                "dead",
                "dying",
                "died",
                "murdered",
                "beast mode",
                "on fire",
                "torched",
            ]),
            normal_training: terms(&[
                "doms",
                "delayed onset",
                "good sore",
                "good soreness",
                "normal soreness",
                "usual soreness",
                "expected soreness",
                "typical soreness",
                "sore from yesterday",
                "sore from the workout",
                "sore from training",
                "feel the burn",
                "felt the burn",
                "good pump",
                "great pump",
                "post-workout soreness",
            ]),
            pain_descriptors: terms(&[
                "pain",
                "painful",
                "hurts",
                "hurt",
                "hurting",
                "ache",
                "aches",
                "injury",
                "injured",
                "discomfort",
            ]),
            discomfort: DiscomfortTiers {
                mild: terms(&[
                    "sore",
                    "soreness",
                    "tight",
                    "tightness",
                    "stiff",
                    "stiffness",
                    "tender",
                    "twinge",
                    "niggle",
                    "niggling",
                    "slight",
                ]),
                moderate: terms(&[
                    "aching",
                    "throbbing",
                    "nagging",
                    "very sore",
                    "really sore",
                    "dull pain",
                ]),
                severe: terms(&[
                    "sharp",
                    "stabbing",
                    "shooting",
                    "excruciating",
                    "severe",
                    "unbearable",
                    "intense pain",
                    "radiating",
                    "burning pain",
                    "agony",
                    "agonizing",
                ]),
            },
            injury_types: vec![
                injury_types(
                    "muscle",
                    &[
                        "pulled muscle",
                        "muscle strain",
                        "muscle tear",
                        "torn muscle",
                        "strained",
                        "strain",
                        "pulled",
                    ],
                ),
                injury_types(
                    "ligament",
                    &[
                        "torn ligament",
                        "rolled ankle",
                        "sprained",
                        "sprain",
                        "acl",
                        "mcl",
                    ],
                ),
                injury_types(
                    "tendon",
                    &[
                        "achilles tendinitis",
                        "tennis elbow",
                        "golfer's elbow",
                        "jumper's knee",
                        "plantar fasciitis",
                        "tendinitis",
                        "tendonitis",
                        "tendinopathy",
                    ],
                ),
                injury_types(
                    "joint",
                    &[
                        "frozen shoulder",
                        "runner's knee",
                        "it band syndrome",
                        "dislocated",
                        "dislocation",
                        "impingement",
                        "bursitis",
                    ],
                ),
                injury_types(
                    "bone",
                    &[
                        "stress fracture",
                        "shin splints",
                        "fracture",
                        "fractured",
                        "broken",
                    ],
                ),
                injury_types(
                    "spine",
                    &[
                        "herniated disc",
                        "slipped disc",
                        "bulging disc",
                        "pinched nerve",
                        "sciatica",
                    ],
                ),
            ],
            injury_type_canonical: mapping(&[
                ("pulled muscle", "muscle_strain"),
                ("muscle strain", "muscle_strain"),
                ("strained", "muscle_strain"),
                ("strain", "muscle_strain"),
                ("pulled", "muscle_strain"),
                ("muscle tear", "muscle_tear"),
                ("torn muscle", "muscle_tear"),
                ("torn ligament", "ligament_tear"),
                ("acl", "ligament_tear"),
                ("mcl", "ligament_tear"),
                ("rolled ankle", "sprain"),
                ("sprained", "sprain"),
                ("sprain", "sprain"),
                ("achilles tendinitis", "tendinitis"),
                ("tendinitis", "tendinitis"),
                ("tendonitis", "tendinitis"),
                ("tendinopathy", "tendinitis"),
                ("tennis elbow", "tennis_elbow"),
                ("golfer's elbow", "golfers_elbow"),
                ("jumper's knee", "patellar_tendinitis"),
                ("plantar fasciitis", "plantar_fasciitis"),
                ("frozen shoulder", "frozen_shoulder"),
                ("runner's knee", "runners_knee"),
                ("it band syndrome", "it_band_syndrome"),
                ("dislocated", "dislocation"),
                ("dislocation", "dislocation"),
                ("impingement", "impingement"),
                ("bursitis", "bursitis"),
                ("stress fracture", "stress_fracture"),
                ("fracture", "fracture"),
                ("fractured", "fracture"),
                ("broken", "fracture"),
                ("shin splints", "shin_splints"),
                ("herniated disc", "herniated_disc"),
                ("slipped disc", "herniated_disc"),
                ("bulging disc", "herniated_disc"),
                ("pinched nerve", "pinched_nerve"),
                ("sciatica", "sciatica"),
            ]),
            context_clues: ContextClues {
                functional_limitation: terms(&[
                    "unable to",
                    "hurts to",
                    "painful to",
                    "difficult to",
                    "hard to walk",
                    "hard to bend",
                    "trouble walking",
                    "trouble bending",
                    "limping",
                    "can't walk",
                    "can't bend",
                    "can't lift",
                    "can't move",
                    "can't straighten",
                    "can't raise",
                    "can't put weight",
                    "cannot walk",
                    "cannot bend",
                    "cannot lift",
                    "limited range",
                    "locked up",
                ]),
                acute_onset: terms(&[
                    "suddenly",
                    "sudden",
                    "popped",
                    "felt a pop",
                    "heard a pop",
                    "snapped",
                    "tweaked",
                    "rolled my",
                    "twisted",
                    "gave out",
                    "gave way",
                    "jarred",
                ]),
                worsening: terms(&[
                    "getting worse",
                    "worse",
                    "worsening",
                    "increasing pain",
                    "more painful",
                ]),
                persistent: terms(&[
                    "for days",
                    "for weeks",
                    "still",
                    "persistent",
                    "won't go away",
                    "not going away",
                    "keeps coming back",
                    "chronic",
                    "ongoing",
                    "lingering",
                    "constant",
                ]),
                objective_signs: terms(&[
                    "swollen",
                    "swelling",
                    "bruised",
                    "bruising",
                    "numb",
                    "numbness",
                    "tingling",
                    "pins and needles",
                    "clicking",
                    "warm to the touch",
                    "black and blue",
                ]),
            },
            body_parts: default_body_parts(),
            body_part_aliases: mapping(&[("back", "lower_back"), ("hamstring", "hamstrings")]),
        }
    }
}

fn default_body_parts() -> Vec<BodyPartEntry> {
    vec![
        body_part("neck", &["neck"], &["cervical"], &["back of my neck", "side of my neck"]),
        body_part(
            "shoulder",
            &["shoulder", "shoulders"],
            &["rotator cuff", "delt", "delts", "deltoid"],
            &["front of my shoulder"],
        ),
        body_part(
            "upper_back",
            &["upper back"],
            &["traps", "trapezius", "rhomboids", "lats", "thoracic"],
            &["shoulder blade", "shoulder blades", "mid back", "between my shoulder blades"],
        ),
        body_part(
            "lower_back",
            &["lower back", "low back"],
            &["lumbar", "lumbar spine"],
            &["bottom of my back", "base of my spine"],
        ),
        body_part("back", &["back"], &["spine"], &[]),
        body_part("chest", &["chest"], &["pec", "pecs", "pectoral", "sternum"], &[]),
        body_part(
            "abdomen",
            &["abdomen", "abs"],
            &["stomach", "core", "oblique", "obliques"],
            &["side of my stomach"],
        ),
        body_part(
            "arm",
            &["arm", "arms", "upper arm"],
            &["bicep", "biceps", "tricep", "triceps"],
            &[],
        ),
        body_part("elbow", &["elbow", "elbows"], &[], &["inside of my elbow", "outside of my elbow"]),
        body_part("forearm", &["forearm", "forearms"], &[], &[]),
        body_part("wrist", &["wrist", "wrists"], &[], &[]),
        body_part(
            "hand",
            &["hand", "hands"],
            &["finger", "fingers", "thumb", "knuckle", "palm"],
            &[],
        ),
        body_part("hip", &["hip", "hips"], &["hip flexor", "hip flexors"], &["front of my hip"]),
        body_part("groin", &["groin"], &["adductor", "adductors"], &["inner thigh"]),
        body_part("glutes", &["glute", "glutes"], &["butt", "buttock", "piriformis"], &[]),
        body_part("hamstrings", &["hamstrings"], &[], &["back of my thigh", "back of my leg"]),
        body_part("hamstring", &["hamstring"], &["hammy", "hammies"], &[]),
        body_part(
            "quadriceps",
            &["quadriceps", "quad", "quads"],
            &["thigh", "thighs"],
            &["front of my thigh"],
        ),
        body_part(
            "knee",
            &["knee", "knees"],
            &["kneecap", "patella", "meniscus"],
            &["back of my knee", "side of my knee"],
        ),
        body_part("shin", &["shin", "shins"], &["tibia"], &["front of my leg"]),
        body_part("calf", &["calf", "calves"], &["gastrocnemius", "soleus"], &["back of my calf"]),
        body_part("achilles", &["achilles"], &["achilles tendon", "heel cord"], &[]),
        body_part(
            "ankle",
            &["ankle", "ankles"],
            &[],
            &["outside of my ankle", "inside of my ankle"],
        ),
        body_part(
            "foot",
            &["foot", "feet"],
            &["heel", "arch", "toe", "toes", "sole"],
            &["bottom of my foot", "top of my foot"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lexicon_is_valid() {
        let lexicon = Lexicon::default();
        assert!(lexicon.validate().is_ok());
        assert!(lexicon.compile().is_ok());
    }

    #[test]
    fn test_every_injury_type_term_is_canonicalized() {
        let lexicon = Lexicon::default();
        for category in &lexicon.injury_types {
            for term in &category.terms {
                assert!(
                    lexicon.injury_type_canonical.contains_key(term),
                    "missing canonical id for {term}"
                );
            }
        }
    }
}
