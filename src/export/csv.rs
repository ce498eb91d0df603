use crate::errors::AppResult;
use crate::models::Checkin;
use csv::Writer;
use std::io::Write;

/// Write classified check-ins as CSV; a missing gap is an empty cell.
pub fn write_checkins_csv<W: Write>(out: W, checkins: &[Checkin]) -> AppResult<()> {
    let mut wtr = Writer::from_writer(out);

    wtr.write_record([
        "id",
        "createdAt",
        "boardId",
        "boardName",
        "isEspresso",
        "gapToPrevSeconds",
    ])?;

    for c in checkins {
        let gap = c.gap_to_prev_seconds.map(|g| g.to_string()).unwrap_or_default();
        wtr.write_record([
            c.id.as_str(),
            c.created_at.as_str(),
            c.board_id.as_str(),
            c.board_name.as_str(),
            if c.is_espresso { "true" } else { "false" },
            gap.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
