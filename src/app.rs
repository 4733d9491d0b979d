use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, trace};

use crate::config::EmitterOptions;
use crate::event::Emission;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmitterState {
    /// `next` is the 0-based index of the iteration still to run.
    AwaitingIteration { next: u64 },
    Done,
}

pub struct Emitter<W> {
    options: EmitterOptions,
    state: EmitterState,
    out: W,
}

impl<W: AsyncWrite + Unpin> Emitter<W> {
    pub fn new(options: EmitterOptions, out: W) -> Self {
        let state = if options.count == 0 {
            EmitterState::Done
        } else {
            EmitterState::AwaitingIteration { next: 0 }
        };
        Self {
            options,
            state,
            out,
        }
    }

    /// Write the banner if requested, then run every iteration to completion.
    pub async fn run(&mut self) -> std::io::Result<()> {
        debug!(options = ?self.options, "starting progress emitter");

        if self.options.multiline {
            for line in Emission::banner() {
                self.emit(&line).await?;
            }
        }

        while self.step().await? {}

        debug!(count = self.options.count, state = ?self.state(), "progress emitter done");
        Ok(())
    }

    /// Sleep for one interval and write the next progress line.
    /// Returns `false` once the emitter has reached `Done`.
    pub async fn step(&mut self) -> std::io::Result<bool> {
        let EmitterState::AwaitingIteration { next } = self.state else {
            return Ok(false);
        };

        tokio::time::sleep(self.options.interval).await;

        let step = next + 1;
        trace!(step, count = self.options.count, "emitting progress");
        self.emit(&Emission::Progress {
            step,
            count: self.options.count,
            inplace: self.options.inplace,
        })
        .await?;

        self.state = if step < self.options.count {
            EmitterState::AwaitingIteration { next: step }
        } else {
            EmitterState::Done
        };
        Ok(true)
    }

    async fn emit(&mut self, emission: &Emission) -> std::io::Result<()> {
        self.out.write_all(emission.render().as_bytes()).await?;
        self.out.flush().await
    }

    pub fn state(&self) -> EmitterState {
        self.state
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
