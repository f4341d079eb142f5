use std::io::Write;

use anyhow::{Context, Result};

use crate::{
    config::DemoDwellingConfig,
    dwelling::{AdmissionResult, Dwelling},
};

const ADMITTED_MESSAGE: &str = "You got a room!";
const AT_CAPACITY_MESSAGE: &str = "Sorry, at capacity and no rooms left.";

pub fn admission_message(result: AdmissionResult) -> &'static str {
    match result {
        AdmissionResult::Admitted => ADMITTED_MESSAGE,
        AdmissionResult::AtCapacity => AT_CAPACITY_MESSAGE,
    }
}

/// Builds every configured dwelling, then prints its attributes, admission
/// attempts and geometry. Nothing is written if any dwelling fails to build.
pub fn run<W: Write>(dwellings: &[DemoDwellingConfig], out: &mut W) -> Result<()> {
    let mut built = Vec::with_capacity(dwellings.len());
    for (index, entry) in dwellings.iter().enumerate() {
        let dwelling = entry.spec.build().with_context(|| {
            format!("demo dwelling #{index} ({:?}) is invalid", entry.spec.kind())
        })?;
        tracing::debug!(
            target: "demo",
            index,
            kind = ?dwelling.kind(),
            residents = dwelling.residents(),
            capacity = dwelling.capacity(),
            "dwelling_constructed"
        );
        built.push((dwelling, entry.admissions));
    }

    for (index, (dwelling, admissions)) in built.iter_mut().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        write_section(dwelling.as_mut(), *admissions, out)?;
    }

    tracing::info!(target: "demo", dwellings = built.len(), "demo_completed");
    Ok(())
}

fn write_section<W: Write>(
    dwelling: &mut dyn Dwelling,
    admissions: u32,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "-----{}-----", dwelling.kind().display_name())?;
    writeln!(out, "Capacity: {}", dwelling.capacity())?;
    writeln!(out, "Material: {}", dwelling.building_material())?;
    writeln!(out, "Has room? {}", dwelling.has_room())?;

    for attempt in 1..=admissions {
        let result = dwelling.admit_resident();
        tracing::info!(
            target: "demo",
            kind = ?dwelling.kind(),
            attempt,
            result = ?result,
            residents = dwelling.residents(),
            "admission_attempted"
        );
        writeln!(out, "{}", admission_message(result))?;
        writeln!(out, "Has room? {}", dwelling.has_room())?;
    }

    writeln!(out, "Floor area: {:.2}", dwelling.floor_area())?;
    if let Some(carpet) = dwelling.max_inscribed_square_carpet_size() {
        writeln!(out, "Carpet size: {carpet:.2}")?;
    }
    Ok(())
}
