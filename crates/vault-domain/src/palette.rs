use std::sync::atomic::{AtomicUsize, Ordering};

use uuid::Uuid;

use crate::folder::FolderColor;

/// Chooses the colour of a newly created folder.
pub trait ColorPolicy: Send + Sync {
    fn pick(&self) -> FolderColor;
}

/// Uniform pick from the palette, seeded from the v4 uuid generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomColorPolicy;

impl ColorPolicy for RandomColorPolicy {
    fn pick(&self) -> FolderColor {
        let index = (Uuid::new_v4().as_u128() % FolderColor::PALETTE.len() as u128) as usize;
        FolderColor::PALETTE[index]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedColorPolicy(pub FolderColor);

impl ColorPolicy for FixedColorPolicy {
    fn pick(&self) -> FolderColor {
        self.0
    }
}

/// Walks the palette in order, wrapping around.
#[derive(Debug, Default)]
pub struct CyclingColorPolicy {
    next: AtomicUsize,
}

impl ColorPolicy for CyclingColorPolicy {
    fn pick(&self) -> FolderColor {
        let index = self.next.fetch_add(1, Ordering::Relaxed) % FolderColor::PALETTE.len();
        FolderColor::PALETTE[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_stays_in_palette() {
        let policy = RandomColorPolicy;
        for _ in 0..64 {
            assert!(FolderColor::PALETTE.contains(&policy.pick()));
        }
    }

    #[test]
    fn test_cycling_wraps() {
        let policy = CyclingColorPolicy::default();
        let picks: Vec<FolderColor> = (0..7).map(|_| policy.pick()).collect();
        assert_eq!(&picks[..6], &FolderColor::PALETTE[..]);
        assert_eq!(picks[6], FolderColor::Rose);
    }
}
