//! One-shot external impulses (weapon recoil) delivered to a [`MovementCore`].
//!
//! The combat side holds an [`ExternalImpulseHandler`]; the core holds the matching
//! [`ImpulseQueue`] and drains it once per tick, after the jump state machine has
//! run. Impulses never touch jump state.
//!
//! [`MovementCore`]: crate::MovementCore

use std::sync::mpsc::{self, Receiver, Sender};

use nalgebra::Vector2;
use thiserror::Error;

use crate::{DEFAULT_RECOIL_SCALE, MIN_IMPULSE_DIRECTION_SQ};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImpulseError {
    #[error("impulse direction has no usable length")]
    ZeroDirection,

    #[error("movement core is gone, impulse dropped")]
    Disconnected,
}

/// Sending side. Cheap to clone; every clone feeds the same core.
#[derive(Clone, Debug)]
pub struct ExternalImpulseHandler {
    tx: Sender<Vector2<f32>>,
    recoil_scale: f32,
}

impl ExternalImpulseHandler {
    /// Queue `-normalize(direction) * recoil_scale` for the next tick.
    ///
    /// Call once per triggering event (one shot, one impulse). Returns the queued impulse.
    pub fn apply_external_impulse(
        &self,
        direction: Vector2<f32>,
    ) -> Result<Vector2<f32>, ImpulseError> {
        let unit = direction
            .iter()
            .all(|c| c.is_finite())
            .then(|| direction.try_normalize(MIN_IMPULSE_DIRECTION_SQ.sqrt()))
            .flatten();

        let Some(unit) = unit else {
            log::warn!("Dropping external impulse with unusable direction {direction:?}");
            return Err(ImpulseError::ZeroDirection);
        };

        let impulse = -unit * self.recoil_scale;
        self.tx.send(impulse).map_err(|_| {
            log::warn!("Dropping external impulse, movement core is gone");
            ImpulseError::Disconnected
        })?;

        Ok(impulse)
    }

    pub fn recoil_scale(&self) -> f32 {
        self.recoil_scale
    }
}

/// Receiving side, owned by the movement core.
#[derive(Debug)]
pub struct ImpulseQueue {
    rx: Receiver<Vector2<f32>>,
}

impl ImpulseQueue {
    /// Every impulse queued since the last drain, oldest first. Never blocks.
    pub fn drain(&self) -> impl Iterator<Item = Vector2<f32>> + '_ {
        self.rx.try_iter()
    }
}

/// Create a connected handler/queue pair using [`DEFAULT_RECOIL_SCALE`].
pub fn impulse_channel() -> (ExternalImpulseHandler, ImpulseQueue) {
    impulse_channel_with_scale(DEFAULT_RECOIL_SCALE)
}

pub fn impulse_channel_with_scale(recoil_scale: f32) -> (ExternalImpulseHandler, ImpulseQueue) {
    let (tx, rx) = mpsc::channel();
    (
        ExternalImpulseHandler { tx, recoil_scale },
        ImpulseQueue { rx },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impulse_points_away_from_aim_direction() {
        let (handler, queue) = impulse_channel();

        let impulse = handler
            .apply_external_impulse(Vector2::new(3.0, 4.0))
            .unwrap();

        assert!((impulse.x + 18.0).abs() < 1.0e-5);
        assert!((impulse.y + 24.0).abs() < 1.0e-5);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained, vec![impulse]);
    }

    #[test]
    fn custom_scale_is_applied() {
        let (handler, queue) = impulse_channel_with_scale(5.0);
        handler
            .apply_external_impulse(Vector2::new(0.0, -2.0))
            .unwrap();

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained, vec![Vector2::new(0.0, 5.0)]);
    }

    #[test]
    fn zero_direction_is_rejected_and_not_queued() {
        let (handler, queue) = impulse_channel();

        assert_eq!(
            handler.apply_external_impulse(Vector2::zeros()),
            Err(ImpulseError::ZeroDirection)
        );
        assert_eq!(
            handler.apply_external_impulse(Vector2::new(f32::NAN, 1.0)),
            Err(ImpulseError::ZeroDirection)
        );
        assert_eq!(queue.drain().count(), 0);
    }

    #[test]
    fn drain_empties_the_queue() {
        let (handler, queue) = impulse_channel();
        handler.apply_external_impulse(Vector2::x()).unwrap();
        handler.apply_external_impulse(Vector2::y()).unwrap();

        assert_eq!(queue.drain().count(), 2);
        assert_eq!(queue.drain().count(), 0);
    }

    #[test]
    fn send_fails_after_queue_dropped() {
        let (handler, queue) = impulse_channel();
        drop(queue);

        assert_eq!(
            handler.apply_external_impulse(Vector2::x()),
            Err(ImpulseError::Disconnected)
        );
    }
}
