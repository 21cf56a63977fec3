use crate::geom::Vec2;
use crate::scene::{Scene, WidgetId};
use rand::Rng;

/// Full width of the square a dodging control can land in, centred on its
/// layout position.
pub(crate) const DODGE_RANGE: f32 = 300.0;

pub(crate) fn dodge_offset<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    Vec2::new(
        (rng.gen::<f32>() - 0.5) * DODGE_RANGE,
        (rng.gen::<f32>() - 0.5) * DODGE_RANGE,
    )
}

/// Jumps `id` to a fresh random offset. Not clamped to the viewport, so the
/// control can end up partly or fully off-screen.
pub(crate) fn move_away<R: Rng + ?Sized>(scene: &mut Scene, id: WidgetId, rng: &mut R) {
    let Some(w) = scene.get_mut(id) else {
        return;
    };
    w.offset = dodge_offset(rng);
    tracing::trace!(?id, dx = w.offset.x, dy = w.offset.y, "control dodged");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Viewport;
    use crate::page::Page;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    proptest! {
        #[test]
        fn offset_stays_in_the_symmetric_range(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let half = DODGE_RANGE / 2.0;
            for _ in 0..16 {
                let o = dodge_offset(&mut rng);
                prop_assert!(o.x >= -half && o.x <= half);
                prop_assert!(o.y >= -half && o.y <= half);
            }
        }
    }

    #[test]
    fn consecutive_dodges_are_independent_draws() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut scene = Scene::for_page(Page::Proposal, Viewport::from_terminal(100, 30));
        move_away(&mut scene, WidgetId::Decline, &mut rng);
        let first = scene.get(WidgetId::Decline).unwrap().offset;
        move_away(&mut scene, WidgetId::Decline, &mut rng);
        let second = scene.get(WidgetId::Decline).unwrap().offset;
        assert_ne!(first, second);
        assert_eq!(scene.get(WidgetId::Accept).unwrap().offset, Vec2::default());
    }

    #[test]
    fn missing_control_is_ignored() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut scene = Scene::for_page(Page::Gallery, Viewport::from_terminal(100, 30));
        move_away(&mut scene, WidgetId::Decline, &mut rng);
    }
}
