//=========================================================================
// Question Bank
//=========================================================================
//
// Deterministic generation of the seven layers of questions.
//
// Architecture:
//   &[QuestionTemplate] ──generate()──> QuestionBank
//                                          └─ layers: Vec<Layer>  (7 × 10)
//
// Template selection slides through the pool: layer L, position i uses
// template ((L - 1) * 3 + i) mod pool_len. No randomness, no I/O.
//
//=========================================================================

//=== Module Declarations =================================================

mod templates;

//=== External Dependencies ===============================================

use log::debug;
use serde::Serialize;

//=== Internal Dependencies ===============================================

use crate::core::constants::{
    LAYER_TEMPLATE_STRIDE, OPTIONS_PER_QUESTION, QUESTIONS_PER_LAYER, TOTAL_LAYERS,
};
use crate::error::{Result, XimeraError};

//=== Public API ==========================================================

pub use templates::ANALYTICS_POOL;

//=== QuestionTemplate ====================================================

/// A topic the bank can turn into one question per layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionTemplate {
    pub topic: &'static str,
    pub prompt: &'static str,
    pub options: [&'static str; OPTIONS_PER_QUESTION],
    pub correct: usize,
}

//=== Question ============================================================

/// A single generated question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Unique per layer and position, e.g. `L3-Q7`.
    pub id: String,
    pub prompt: String,
    /// Position-significant; never shuffled.
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: Option<String>,
}

impl Question {
    /// Returns true if `option_index` picks the correct option.
    ///
    /// Indices outside the option list are simply wrong.
    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_index
    }
}

//=== Layer ===============================================================

/// One ring of the formation: exactly [`QUESTIONS_PER_LAYER`] questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layer {
    /// 1-based layer number.
    pub id: u32,
    pub name: String,
    pub questions: Vec<Question>,
}

//=== QuestionBank ========================================================

/// The full, immutable set of layers for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionBank {
    layers: Vec<Layer>,
}

impl QuestionBank {
    //--- Construction -----------------------------------------------------

    /// Generates all layers from `pool`.
    ///
    /// # Errors
    ///
    /// - [`XimeraError::EmptyTemplatePool`] if `pool` is empty
    /// - [`XimeraError::InvalidTemplate`] if a template's correct index
    ///   does not name one of its options
    pub fn generate(pool: &[QuestionTemplate]) -> Result<Self> {
        if pool.is_empty() {
            return Err(XimeraError::EmptyTemplatePool);
        }

        if let Some(bad) = pool.iter().find(|t| t.correct >= t.options.len()) {
            return Err(XimeraError::InvalidTemplate {
                topic: bad.topic.to_string(),
                correct: bad.correct,
                options: bad.options.len(),
            });
        }

        let layers = (1..=TOTAL_LAYERS)
            .map(|layer| Layer {
                id: layer,
                name: format!("Chakravyuh Layer {}", layer),
                questions: (0..QUESTIONS_PER_LAYER)
                    .map(|position| build_question(pool, layer, position))
                    .collect(),
            })
            .collect();

        debug!(
            target: "questions",
            "Generated {} layers from a pool of {} templates",
            TOTAL_LAYERS,
            pool.len()
        );

        Ok(Self { layers })
    }

    /// Generates the bank from the built-in [`ANALYTICS_POOL`].
    pub fn analytics() -> Result<Self> {
        Self::generate(ANALYTICS_POOL)
    }

    //--- Queries ----------------------------------------------------------

    /// All layers, innermost last.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Looks up a layer by its 1-based id.
    pub fn layer(&self, id: u32) -> Option<&Layer> {
        let index = usize::try_from(id.checked_sub(1)?).ok()?;
        self.layers.get(index)
    }

    /// Looks up the question at `position` (0-based) within layer `layer`.
    pub fn question(&self, layer: u32, position: usize) -> Option<&Question> {
        self.layer(layer)?.questions.get(position)
    }

    /// Resolves a cumulative question index against a layer.
    ///
    /// The within-layer position is `cumulative_index % QUESTIONS_PER_LAYER`.
    pub fn question_at(&self, layer: u32, cumulative_index: usize) -> Option<&Question> {
        self.question(layer, cumulative_index % QUESTIONS_PER_LAYER)
    }
}

//=== Internal Helpers ====================================================

/// Pool index for layer `layer` (1-based) and `position` (0-based).
fn template_index(layer: u32, position: usize, pool_len: usize) -> usize {
    let offset = (layer as usize - 1) * LAYER_TEMPLATE_STRIDE;
    (offset + position) % pool_len
}

fn build_question(pool: &[QuestionTemplate], layer: u32, position: usize) -> Question {
    let template = &pool[template_index(layer, position, pool.len())];

    Question {
        id: format!("L{}-Q{}", layer, position),
        prompt: format!("Layer {} Challenge: {}", layer, template.prompt),
        options: template.options.iter().map(|o| o.to_string()).collect(),
        correct_index: template.correct,
        explanation: Some(format!(
            "This relates to the core concept of {}.",
            template.topic
        )),
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
