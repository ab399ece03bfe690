//! Content catalog generation.

use fake::{Fake, faker::company::en::CatchPhrase};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::generators::sequential_ids;
use crate::models::{ContentType, Difficulty, Domain, Subtopic};
use crate::sampling::Categorical;

/// Generated content row, fields in `content.csv` column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub content_id: u32,
    pub title: String,
    pub domain: Domain,
    pub subtopic: Subtopic,
    pub difficulty_level: Difficulty,
    pub content_type: ContentType,
}

/// Configuration for content generation.
#[derive(Debug, Clone)]
pub struct ContentGenConfig {
    /// Relative weights for [`Difficulty::ALL`].
    pub difficulty_weights: [f64; 3],
    /// Relative weights for [`ContentType::ALL`].
    pub content_type_weights: [f64; 4],
}

impl Default for ContentGenConfig {
    fn default() -> Self {
        Self {
            difficulty_weights: Difficulty::WEIGHTS,
            content_type_weights: ContentType::WEIGHTS,
        }
    }
}

/// Generates content items. Every column is sampled independently.
pub struct ContentGenerator {
    difficulty: Categorical<Difficulty>,
    content_type: Categorical<ContentType>,
}

impl ContentGenerator {
    /// Creates a new content generator with default configuration.
    pub fn new() -> Result<Self, DatasetError> {
        Self::with_config(ContentGenConfig::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: ContentGenConfig) -> Result<Self, DatasetError> {
        Ok(Self {
            difficulty: Categorical::new(&Difficulty::ALL, &config.difficulty_weights)?,
            content_type: Categorical::new(&ContentType::ALL, &config.content_type_weights)?,
        })
    }

    /// Generates a single content item with the given id.
    pub fn generate(&self, content_id: u32, rng: &mut impl Rng) -> GeneratedContent {
        GeneratedContent {
            content_id,
            title: CatchPhrase().fake_with_rng(rng),
            domain: Domain::ALL[rng.gen_range(0..Domain::ALL.len())],
            subtopic: Subtopic::ALL[rng.gen_range(0..Subtopic::ALL.len())],
            difficulty_level: self.difficulty.sample(rng),
            content_type: self.content_type.sample(rng),
        }
    }

    /// Generates `count` content items with sequential ids starting at 1.
    pub fn generate_batch(
        &self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<GeneratedContent>, DatasetError> {
        let ids = sequential_ids(count, "content")?;
        Ok(ids.map(|id| self.generate(id, rng)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_batch() {
        let content_gen = ContentGenerator::new().unwrap();
        let mut rng = StdRng::seed_from_u64(10);
        let items = content_gen.generate_batch(100, &mut rng).unwrap();

        assert_eq!(items.len(), 100);
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.content_id, i as u32 + 1);
            assert!(!item.title.is_empty());
        }
    }

    #[test]
    fn test_weighted_columns() {
        let content_gen = ContentGenerator::new().unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let items = content_gen.generate_batch(20_000, &mut rng).unwrap();

        let share = |n: usize| n as f64 / items.len() as f64;
        let difficulty = |d: Difficulty| {
            share(items.iter().filter(|c| c.difficulty_level == d).count())
        };
        let content_type = |t: ContentType| {
            share(items.iter().filter(|c| c.content_type == t).count())
        };

        let beginner = difficulty(Difficulty::Beginner);
        let advanced = difficulty(Difficulty::Advanced);
        let video = content_type(ContentType::Video);
        let quiz = content_type(ContentType::InteractiveQuiz);

        assert!((beginner - 0.5).abs() < 0.02, "beginner share {beginner}");
        assert!((advanced - 0.15).abs() < 0.02, "advanced share {advanced}");
        assert!((video - 0.6).abs() < 0.02, "video share {video}");
        assert!((quiz - 0.1).abs() < 0.02, "quiz share {quiz}");
    }

    #[test]
    fn test_custom_weights() {
        let content_gen = ContentGenerator::with_config(ContentGenConfig {
            difficulty_weights: [0.0, 0.0, 1.0],
            ..Default::default()
        })
        .unwrap();
        let mut rng = StdRng::seed_from_u64(12);

        for item in content_gen.generate_batch(200, &mut rng).unwrap() {
            assert_eq!(item.difficulty_level, Difficulty::Advanced);
        }
    }
}
