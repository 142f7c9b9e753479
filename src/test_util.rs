use std::collections::VecDeque;

use crate::entropy::EntropySource;

/// Hands out a fixed sequence of bytes, and panics if asked for more than it holds.
pub(crate) struct ScriptedEntropy {
    bytes: VecDeque<u8>,
    pub consumed: usize,
}

impl ScriptedEntropy {
    pub fn new(bytes: &[u8]) -> ScriptedEntropy {
        ScriptedEntropy {
            bytes: bytes.iter().copied().collect(),
            consumed: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }
}

impl EntropySource for ScriptedEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), rand::Error> {
        for b in buf.iter_mut() {
            *b = self.bytes.pop_front().expect("entropy script exhausted");
        }
        self.consumed += buf.len();
        Ok(())
    }
}

/// Fails every request, like an OS source that has gone away.
pub(crate) struct FailingEntropy;

impl EntropySource for FailingEntropy {
    fn fill(&mut self, _buf: &mut [u8]) -> Result<(), rand::Error> {
        Err(rand::Error::new("entropy source unavailable"))
    }
}
