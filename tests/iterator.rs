use chrono::Utc;
use cron_seek::{Result, Schedule};

#[test]
fn iterator() -> Result<()> {
    let schedule = Schedule::new("0 0 0 * * *")?;
    let now = Utc::now();

    // Get the next 10 timestamps starting from now
    let events: Vec<_> = schedule.iter(&now).take(10).collect::<std::result::Result<_, _>>().unwrap();
    assert_eq!(events.len(), 10);
    for pair in events.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    events.iter().for_each(|t| println!("next: {t}"));

    Ok(())
}

#[test]
fn iterator_backward() -> Result<()> {
    let schedule = Schedule::new("0 0 0 * * *")?;
    let now = Utc::now();

    // Get the previous 10 timestamps starting from now
    let events: Vec<_> = schedule
        .iter_backward(&now)
        .take(10)
        .collect::<std::result::Result<_, _>>()
        .unwrap();
    assert_eq!(events.len(), 10);
    for pair in events.windows(2) {
        assert!(pair[0] > pair[1]);
    }
    events.iter().for_each(|t| println!("previous: {t}"));

    Ok(())
}
