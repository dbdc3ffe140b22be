use crate::{
    error::HarnessError,
    solutions::Part,
    status::{Config, ConfigStore},
    timing::ExecutionOutcome,
};

fn record_fields(outcome: Option<&ExecutionOutcome>) -> (Option<String>, Option<f64>) {
    match outcome {
        Some(o) if !o.result.is_absent() => (o.result.to_record_string(), Some(o.elapsed_ms)),
        _ => (None, None),
    }
}

/// Writes `result` and `time` of both parts of `day` into `config`. A missing outcome clears
/// them; any other field of the part is left alone.
pub fn merge(
    config: &mut Config,
    day: u8,
    part1: Option<&ExecutionOutcome>,
    part2: Option<&ExecutionOutcome>,
) -> Result<(), HarnessError> {
    let slots = config.days.len();
    let record = config
        .day_mut(day)
        .ok_or(HarnessError::DayOutOfRange { day, slots })?;

    for (part, outcome) in [(Part::One, part1), (Part::Two, part2)] {
        let (result, time) = record_fields(outcome);
        record.part_mut(part).set(result, time);
    }
    Ok(())
}

/// [`merge`] followed by a single save of the whole config.
pub fn record(
    store: &dyn ConfigStore,
    mut config: Config,
    day: u8,
    part1: Option<&ExecutionOutcome>,
    part2: Option<&ExecutionOutcome>,
) -> anyhow::Result<Config> {
    self::merge(&mut config, day, part1, part2)?;
    store.save_config(&config)?;
    Ok(config)
}
