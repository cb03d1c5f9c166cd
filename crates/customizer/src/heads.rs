//! Mutually exclusive head variant visibility

use scarab_ipc::HeadVariant;
use tracing::{debug, info};

use crate::error::CommandError;

/// Which head variants the model provides and which one is shown.
///
/// Invariant: once any variant is loaded, exactly one loaded variant is
/// active and every other variant is hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadVariants {
    /// Loaded variants, in enumeration order
    loaded: Vec<HeadVariant>,
    active: Option<HeadVariant>,
}

impl HeadVariants {
    /// Register the variants found in the model and show the first one.
    ///
    /// Returns the variant made visible, if any were found.
    pub fn on_model_loaded(&mut self, available: impl IntoIterator<Item = HeadVariant>) -> Option<HeadVariant> {
        let mut loaded: Vec<HeadVariant> = available.into_iter().collect();
        loaded.sort();
        loaded.dedup();
        self.loaded = loaded;
        self.active = self.loaded.first().copied();
        if let Some(head) = self.active {
            info!("Head variants loaded: {:?}, showing {:?}", self.loaded, head);
        }
        self.active
    }

    /// Show `target` and hide every other variant.
    ///
    /// Returns `Ok(true)` if the visible variant changed and `Ok(false)` if
    /// `target` was already shown. Errors leave the current assignment as is.
    pub fn switch_to(&mut self, target: HeadVariant) -> Result<bool, CommandError> {
        if self.loaded.is_empty() {
            return Err(CommandError::ModelNotLoaded(target));
        }
        if !self.loaded.contains(&target) {
            return Err(CommandError::HeadNotLoaded(target));
        }
        if self.active == Some(target) {
            return Ok(false);
        }
        debug!("Switching to head: {:?}", target);
        self.active = Some(target);
        Ok(true)
    }

    pub fn active(&self) -> Option<HeadVariant> {
        self.active
    }

    pub fn loaded(&self) -> &[HeadVariant] {
        &self.loaded
    }

    pub fn is_loaded(&self) -> bool {
        !self.loaded.is_empty()
    }

    /// Visibility flag for one variant
    pub fn is_visible(&self, variant: HeadVariant) -> bool {
        self.active == Some(variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_all() -> HeadVariants {
        let mut heads = HeadVariants::default();
        heads.on_model_loaded(HeadVariant::ALL);
        heads
    }

    fn visible_count(heads: &HeadVariants) -> usize {
        HeadVariant::ALL
            .into_iter()
            .filter(|&v| heads.is_visible(v))
            .count()
    }

    #[test]
    fn test_first_variant_visible_on_load() {
        let heads = loaded_all();
        assert_eq!(heads.active(), Some(HeadVariant::A));
        assert_eq!(visible_count(&heads), 1);
    }

    #[test]
    fn test_load_order_does_not_matter() {
        let mut heads = HeadVariants::default();
        let shown = heads.on_model_loaded([HeadVariant::C, HeadVariant::B]);
        assert_eq!(shown, Some(HeadVariant::B));
        assert_eq!(heads.loaded(), &[HeadVariant::B, HeadVariant::C]);
    }

    #[test]
    fn test_switch_sequences_keep_exactly_one_visible() {
        for a in HeadVariant::ALL {
            for b in HeadVariant::ALL {
                if a == b {
                    continue;
                }
                let mut heads = loaded_all();
                heads.switch_to(a).unwrap();
                assert_eq!(visible_count(&heads), 1);
                assert!(heads.switch_to(b).unwrap());
                assert_eq!(visible_count(&heads), 1);
                assert!(heads.is_visible(b));
                assert!(!heads.is_visible(a));
            }
        }
    }

    #[test]
    fn test_switch_to_current_is_noop() {
        let mut heads = loaded_all();
        let before = heads.clone();
        assert!(!heads.switch_to(HeadVariant::A).unwrap());
        assert_eq!(heads, before);
    }

    #[test]
    fn test_switch_before_load_is_rejected() {
        let mut heads = HeadVariants::default();
        assert_eq!(
            heads.switch_to(HeadVariant::B),
            Err(CommandError::ModelNotLoaded(HeadVariant::B))
        );
        assert_eq!(heads.active(), None);
    }

    #[test]
    fn test_switch_to_missing_variant_keeps_assignment() {
        let mut heads = HeadVariants::default();
        heads.on_model_loaded([HeadVariant::A, HeadVariant::B]);
        heads.switch_to(HeadVariant::B).unwrap();
        let before = heads.clone();

        assert_eq!(
            heads.switch_to(HeadVariant::C),
            Err(CommandError::HeadNotLoaded(HeadVariant::C))
        );
        assert_eq!(heads, before);
        assert!(heads.is_visible(HeadVariant::B));
    }

    #[test]
    fn test_model_without_heads() {
        let mut heads = HeadVariants::default();
        assert_eq!(heads.on_model_loaded([]), None);
        assert!(!heads.is_loaded());
    }
}
