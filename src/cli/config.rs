//! Engine flags shared across commands

use clap::Args;

use crate::{app::EngineConfig, search::SearchStrategy, tictactoe::Side};

/// Flags selecting how the AI searches and who opens
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct EngineArgs {
    /// Search strategy used by the AI
    #[arg(long, short = 's', value_enum, default_value_t = SearchStrategy::default())]
    pub strategy: SearchStrategy,

    /// Let the AI make the first move
    #[arg(long)]
    pub ai_first: bool,
}

impl EngineArgs {
    pub fn to_config(self) -> EngineConfig {
        let opener = if self.ai_first { Side::Ai } else { Side::Player };
        EngineConfig::new()
            .with_strategy(self.strategy)
            .with_opener(opener)
    }
}
