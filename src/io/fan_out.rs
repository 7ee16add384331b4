//! Fan-out writer over the primary stream and the opened targets.

use std::fmt;
use std::io::{self, Write};

use tracing::trace;

use crate::error::{PRIMARY_ID, WriteFailure};

struct Member<'a> {
    id: &'a str,
    writer: &'a mut dyn Write,
}

/// A writer that replicates every write to all of its members, in order.
///
/// The first member is always the primary stream. Each write hands the full
/// chunk to every member with `write_all`, and the primary is flushed before
/// the targets are written. The first member that fails aborts
/// the write and later members do not see that chunk. The returned error wraps
/// a [`WriteFailure`] naming the failing member.
///
/// `FanOut` borrows its members and never closes them.
pub struct FanOut<'a> {
    members: Vec<Member<'a>>,
}

impl<'a> FanOut<'a> {
    /// Create a fan-out writer whose only member is the primary stream.
    pub fn new(primary: &'a mut dyn Write) -> Self {
        Self {
            members: vec![Member {
                id: PRIMARY_ID,
                writer: primary,
            }],
        }
    }

    /// Append a member after all existing ones.
    pub fn push(&mut self, id: &'a str, writer: &'a mut dyn Write) {
        self.members.push(Member { id, writer });
    }

    /// Number of members, including the primary stream.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false: the primary stream is a member.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member ids in write order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.members.iter().map(|m| m.id)
    }
}

impl Write for FanOut<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for (i, member) in self.members.iter_mut().enumerate() {
            member
                .writer
                .write_all(buf)
                .map_err(|e| WriteFailure::into_io(member.id, e))?;
            // A buffered primary (e.g. line-buffered stdout) must fail here,
            // before any target sees the chunk.
            if i == 0 {
                member
                    .writer
                    .flush()
                    .map_err(|e| WriteFailure::into_io(member.id, e))?;
            }
        }
        trace!(bytes = buf.len(), members = self.members.len(), "mirrored chunk");
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        for member in &mut self.members {
            member
                .writer
                .flush()
                .map_err(|e| WriteFailure::into_io(member.id, e))?;
        }
        Ok(())
    }
}

impl fmt::Debug for FanOut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FanOut")
            .field("members", &self.ids().collect::<Vec<_>>())
            .finish()
    }
}
