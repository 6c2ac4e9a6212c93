use chrono::Utc;
use cron_seek::{Result, Schedule};

#[test]
fn next() -> Result<()> {
    let schedule = Schedule::new("0 0 0 * * *")?;
    let now = Utc::now();

    // Get the next event's timestamp starting from now
    let next = schedule.next(&now).unwrap();
    assert!(next >= now);
    println!("next: {next}");

    Ok(())
}

#[test]
fn previous() -> Result<()> {
    let schedule = Schedule::new("0 0 0 * * *")?;
    let now = Utc::now();

    // Get the previous event's timestamp starting from now
    let previous = schedule.previous(&now).unwrap();
    assert!(previous <= now);
    println!("previous: {previous}");

    Ok(())
}

#[test]
fn next_surrounds_previous() -> Result<()> {
    let schedule = Schedule::new("*/5 * * * *")?;
    let now = Utc::now();

    let next = schedule.next(&now).unwrap();
    let previous = schedule.previous(&now).unwrap();
    assert!(previous <= next);
    assert!(schedule.matches(&next));
    assert!(schedule.matches(&previous));

    Ok(())
}
