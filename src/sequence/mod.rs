// ABOUTME: Phase sequencing for operator commands.
// ABOUTME: Builds per-command sequences and runs them with ordering and interrupt guarantees.

mod flows;
mod guard;
mod phase;
mod report;
mod sequencer;

pub use flows::{
    ADVERT_PHASE, CONFIG_PHASE, CONNECT_PHASE, DISCONNECT_PHASE, IDLE_PHASE, LOGIN_PHASE,
    QUIT_PHASE, RETRACT_PHASE, advert_flow, broadcast, config_flow, config_phase, connect_flow,
    disconnect_flow, distribute, login_flow, quit_flow,
};
pub use guard::InterruptGuard;
pub use phase::{Phase, Sequence, Step};
pub use report::{BatchReport, FailureDetail, PhaseReport};
pub use sequencer::Sequencer;
