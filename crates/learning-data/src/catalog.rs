//! Job title catalog: titles grouped by seniority tier, their sampling
//! weights, and the rules that derive seniority and department from a title.

use std::collections::HashMap;

use rand::Rng;
use tracing::debug;

use crate::error::DatasetError;
use crate::models::{Department, Seniority};
use crate::sampling::Categorical;

/// Titles grouped by the seniority level they imply.
pub const JOB_TITLES_BY_SENIORITY: &[(Seniority, &[&str])] = &[
    (
        Seniority::Student,
        &[
            "Student (Data Science)",
            "Student (Software Engineering)",
            "Student (Business Analyst)",
            "Student (Marketing)",
        ],
    ),
    (
        Seniority::Fresher,
        &[
            "Fresher (Data Analyst)",
            "Fresher (Junior Developer)",
            "Fresher (Business Analyst)",
            "Fresher (Marketing Associate)",
        ],
    ),
    (
        Seniority::Junior,
        &[
            "Junior Data Analyst",
            "Junior Data Scientist",
            "Junior Software Engineer",
            "Junior Machine Learning Engineer",
            "Junior Business Analyst",
            "Marketing Assistant",
        ],
    ),
    (
        Seniority::Mid,
        &[
            "Data Analyst",
            "Data Scientist",
            "Software Engineer",
            "Machine Learning Engineer",
            "Business Intelligence Analyst",
            "Product Manager",
            "Marketing Manager",
        ],
    ),
    (
        Seniority::Senior,
        &[
            "Senior Data Analyst",
            "Senior Data Scientist",
            "Senior Software Engineer",
            "Senior Machine Learning Engineer",
            "Senior Product Manager",
        ],
    ),
    (
        Seniority::Lead,
        &[
            "Lead Data Scientist",
            "Principal Engineer",
            "Data Science Manager",
            "Director of Data",
        ],
    ),
];

/// Relative weight of each title, in the flattened order of
/// [`JOB_TITLES_BY_SENIORITY`].
pub const JOB_TITLE_WEIGHTS: &[f64] = &[
    15.0, 10.0, 10.0, 10.0, // Students
    10.0, 10.0, 5.0, 5.0, // Freshers
    5.0, 5.0, 5.0, 5.0, 5.0, 3.0, // Juniors
    2.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, // Mid
    1.0, 1.0, 1.0, 1.0, 1.0, // Seniors
    0.5, 0.5, 0.5, 0.5, // Leads
];

/// Ordered department rules; the first rule with a matching keyword wins.
const DEPARTMENT_RULES: &[(&[&str], Department)] = &[
    (&["Engineer", "Developer", "Principal"], Department::Engineering),
    (&["Data", "Scientist", "Analyst"], Department::Data),
    (&["Product"], Department::Product),
    (&["Marketing"], Department::Marketing),
];

/// Derives the department from a job title.
pub fn department_for(title: &str) -> Department {
    DEPARTMENT_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| title.contains(k)))
        .map(|(_, department)| *department)
        .unwrap_or(Department::NotApplicable)
}

/// Validated job title vocabulary with its sampling distribution and
/// title -> seniority lookup.
#[derive(Debug, Clone)]
pub struct JobCatalog {
    titles: Categorical<&'static str>,
    /// Seniority of each title, aligned with `titles`.
    levels: Vec<Seniority>,
    seniority: HashMap<&'static str, Seniority>,
}

impl JobCatalog {
    /// Builds the catalog from a tier table and a flat weight list.
    ///
    /// Fails before any sampling if the weight count differs from the title
    /// count, a title appears in more than one tier, or the weights cannot
    /// form a distribution.
    pub fn new(
        tiers: &[(Seniority, &[&'static str])],
        weights: &[f64],
    ) -> Result<Self, DatasetError> {
        let all_titles: Vec<&'static str> = tiers
            .iter()
            .flat_map(|(_, titles)| titles.iter().copied())
            .collect();

        if weights.len() != all_titles.len() {
            return Err(DatasetError::WeightCountMismatch {
                weights: weights.len(),
                categories: all_titles.len(),
            });
        }

        let mut seniority = HashMap::with_capacity(all_titles.len());
        let mut levels = Vec::with_capacity(all_titles.len());
        for (level, titles) in tiers {
            for &title in titles.iter() {
                levels.push(*level);
                if seniority.insert(title, *level).is_some() {
                    return Err(DatasetError::DuplicateTitle {
                        title: title.to_string(),
                    });
                }
            }
        }

        let titles = Categorical::new(&all_titles, weights)?;
        debug!(titles = all_titles.len(), "Built job catalog");

        Ok(Self {
            titles,
            levels,
            seniority,
        })
    }

    /// The compiled-in catalog.
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::new(JOB_TITLES_BY_SENIORITY, JOB_TITLE_WEIGHTS)
    }

    /// Samples a job title according to the normalized weights, together
    /// with its seniority level.
    pub fn sample(&self, rng: &mut impl Rng) -> (&'static str, Seniority) {
        let idx = self.titles.sample_index(rng);
        (self.titles.choices()[idx], self.levels[idx])
    }

    /// Seniority level of a catalog title.
    pub fn seniority_of(&self, title: &str) -> Option<Seniority> {
        self.seniority.get(title).copied()
    }

    /// All titles in flattened tier order.
    pub fn titles(&self) -> &[&'static str] {
        self.titles.choices()
    }

    /// Normalized title probabilities, aligned with [`Self::titles`].
    pub fn probabilities(&self) -> &[f64] {
        self.titles.probabilities()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = JobCatalog::new(JOB_TITLES_BY_SENIORITY, JOB_TITLE_WEIGHTS).unwrap();
        assert_eq!(catalog.titles().len(), 30);
        assert_eq!(catalog.probabilities().len(), 30);

        let total: f64 = catalog.probabilities().iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_weight_count_mismatch_fails_fast() {
        let weights = &JOB_TITLE_WEIGHTS[..JOB_TITLE_WEIGHTS.len() - 1];
        let result = JobCatalog::new(JOB_TITLES_BY_SENIORITY, weights);
        assert!(matches!(
            result,
            Err(DatasetError::WeightCountMismatch {
                weights: 29,
                categories: 30
            })
        ));
    }

    #[test]
    fn test_duplicate_title_rejected() {
        let tiers: &[(Seniority, &[&'static str])] = &[
            (Seniority::Junior, &["Data Analyst"]),
            (Seniority::Mid, &["Data Analyst"]),
        ];
        let result = JobCatalog::new(tiers, &[1.0, 1.0]);
        assert!(matches!(result, Err(DatasetError::DuplicateTitle { .. })));
    }

    #[test]
    fn test_unusable_weights_rejected() {
        let tiers: &[(Seniority, &[&'static str])] =
            &[(Seniority::Lead, &["Tech Lead", "Data Lead"])];
        let cases: [(&str, [f64; 2]); 5] = [
            ("negative", [-1.0, 2.0]),
            ("nan", [f64::NAN, 1.0]),
            ("infinite", [f64::INFINITY, 1.0]),
            ("overflowing sum", [f64::MAX, f64::MAX]),
            ("all zero", [0.0, 0.0]),
        ];

        for (case, weights) in cases {
            let result = JobCatalog::new(tiers, &weights);
            assert!(
                matches!(result, Err(DatasetError::InvalidWeights(_))),
                "{case} weights should be rejected"
            );
        }
    }

    #[test]
    fn test_seniority_lookup() {
        let catalog = JobCatalog::builtin().unwrap();
        assert_eq!(
            catalog.seniority_of("Student (Marketing)"),
            Some(Seniority::Student)
        );
        assert_eq!(
            catalog.seniority_of("Marketing Assistant"),
            Some(Seniority::Junior)
        );
        assert_eq!(
            catalog.seniority_of("Principal Engineer"),
            Some(Seniority::Lead)
        );
        assert_eq!(catalog.seniority_of("Astronaut"), None);
    }

    #[test]
    fn test_every_title_has_one_seniority() {
        let catalog = JobCatalog::builtin().unwrap();
        for (level, titles) in JOB_TITLES_BY_SENIORITY {
            for title in titles.iter() {
                assert_eq!(catalog.seniority_of(title), Some(*level), "{title}");
            }
        }
    }

    #[test]
    fn test_department_rules_first_match_wins() {
        assert_eq!(department_for("Principal Engineer"), Department::Engineering);
        assert_eq!(
            department_for("Fresher (Junior Developer)"),
            Department::Engineering
        );
        // "Engineer" outranks "Data"/"Scientist"
        assert_eq!(
            department_for("Senior Machine Learning Engineer"),
            Department::Engineering
        );
        // "Engineering" contains "Engineer"
        assert_eq!(
            department_for("Student (Software Engineering)"),
            Department::Engineering
        );
        assert_eq!(department_for("Data Science Manager"), Department::Data);
        assert_eq!(department_for("Student (Business Analyst)"), Department::Data);
        assert_eq!(department_for("Senior Product Manager"), Department::Product);
        assert_eq!(department_for("Marketing Manager"), Department::Marketing);
        assert_eq!(department_for("Director of Data"), Department::Data);
        assert_eq!(department_for("Astronaut"), Department::NotApplicable);
    }

    #[test]
    fn test_title_frequencies_fit_weights() {
        use rand::SeedableRng;
        let catalog = JobCatalog::builtin().unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(12345);

        let n = 100_000;
        let index: HashMap<&str, usize> = catalog
            .titles()
            .iter()
            .enumerate()
            .map(|(i, t)| (*t, i))
            .collect();
        let mut observed = vec![0usize; catalog.titles().len()];
        for _ in 0..n {
            observed[index[catalog.sample(&mut rng).0]] += 1;
        }

        let chi_square: f64 = observed
            .iter()
            .zip(catalog.probabilities())
            .map(|(&o, &p)| {
                let expected = p * n as f64;
                (o as f64 - expected).powi(2) / expected
            })
            .sum();

        // 29 degrees of freedom; critical value at p = 0.001 is about 58.3.
        assert!(chi_square < 58.3, "Chi-square {chi_square} too large");
    }
}
