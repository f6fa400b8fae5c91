use crate::core::{BoxCapability, Capability};

/// Fans one input out to an ordered list of targets.
///
/// Targets are called in order with a clone of the input. The first error
/// stops the fan-out and is returned as is; targets after the failing one
/// are never called, so a failure means at most partial delivery. Target
/// outputs are discarded and a full pass returns `Ok(())`.
pub struct Multiplex<I, O, E> {
    targets: Vec<BoxCapability<I, O, E>>,
}

impl<I, O, E> Multiplex<I, O, E> {
    pub fn new(targets: Vec<BoxCapability<I, O, E>>) -> Self {
        Self { targets }
    }

    pub fn with_target(mut self, target: BoxCapability<I, O, E>) -> Self {
        self.targets.push(target);
        self
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl<I, O, E> Capability<I> for Multiplex<I, O, E>
where
    I: Clone,
{
    type Output = ();
    type Error = E;

    fn call(&mut self, input: I) -> Result<(), E> {
        let total = self.targets.len();
        for (index, target) in self.targets.iter_mut().enumerate() {
            if let Err(err) = target.call(input.clone()) {
                tracing::debug!(
                    target_index = index,
                    total,
                    "Multiplexed target failed, skipping the rest"
                );
                return Err(err);
            }
        }
        Ok(())
    }
}
