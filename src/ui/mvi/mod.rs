//! State / Intent / Reducer primitives.
//!
//! Every widget in the UI layer follows the same one-way flow:
//!
//! ```text
//! activation ──→ Intent ──→ Reducer ──→ State ──→ render
//!     ↑                                             │
//!     └─────────────────────────────────────────────┘
//! ```
//!
//! The host owns the state value and swaps it for whatever the reducer
//! returns, then redraws.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
