// ABOUTME: Connect command implementation.
// ABOUTME: Picks a room (flag or prompt), then disconnects and reconnects every worker.

use super::CommandContext;
use crate::interactive::choose_room;
use fleetctl::error::Result;
use fleetctl::sequence::{BatchReport, connect_flow};

pub async fn connect(ctx: &CommandContext<'_>, room: Option<u64>) -> Result<BatchReport> {
    let room_id = match room {
        Some(room_id) => room_id,
        None => choose_room(ctx.config.rooms_file.clone()).await?,
    };

    ctx.output.progress(&format!(
        "  → Moving {} worker(s) to room {}...",
        ctx.targets.len(),
        room_id
    ));
    Ok(ctx.sequencer.run(connect_flow(ctx.targets, room_id)).await)
}
