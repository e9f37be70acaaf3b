use std::io::{self, Write};

use board::view::{self, StatusClass};
use board::Snapshot;

/// Print the board as a fixed-width table followed by the stats line and
/// the slots currently offered for parking.
pub fn write_board<W: Write>(out: &mut W, snapshot: &Snapshot) -> io::Result<()> {
    writeln!(
        out,
        "{:<10} | {:<12} | {:<12} | {:<16}",
        "SLOT", "STATUS", "PLATE", "MODEL"
    )?;
    for card in view::grid(snapshot) {
        let (plate, model) = card
            .vehicle
            .map(|vehicle| (vehicle.plate, vehicle.model))
            .unwrap_or_default();
        writeln!(
            out,
            "{:<10} | {:<12} | {:<12} | {:<16}{}",
            card.id,
            card.badge,
            plate,
            model,
            marker(card.class)
        )?;
    }

    let stats = view::stats(snapshot);
    let free = view::picker_options(snapshot);
    writeln!(
        out,
        "available: {} | occupied: {} | free slots: {}",
        stats.available,
        stats.occupied,
        if free.is_empty() {
            "-".to_string()
        } else {
            free.join(", ")
        }
    )
}

fn marker(class: StatusClass) -> &'static str {
    match class {
        StatusClass::Available => "",
        StatusClass::Occupied => " [occupied]",
        StatusClass::Reserved => " [reserved]",
        StatusClass::Unavailable => " [unavailable]",
    }
}
