use std::{
    num::NonZeroUsize,
    time::{Duration, Instant},
};

/// Result of the last run together with the average wall-clock time of all
/// runs.
#[derive(Debug, Clone, Copy)]
pub struct Timed<T> {
    pub average: Duration,
    pub last: T,
}

impl<T> Timed<T> {
    pub fn seconds(&self) -> f64 {
        self.average.as_secs_f64()
    }
}

/// Runs `f` `repeats` times and measures the total elapsed time. The first
/// error stops the measurement.
pub fn time_average<T, E, F>(repeats: NonZeroUsize, mut f: F) -> Result<Timed<T>, E>
where
    F: FnMut() -> Result<T, E>,
{
    let begin = Instant::now();

    let mut last = f()?;
    for _ in 1..repeats.get() {
        last = f()?;
    }

    Ok(Timed {
        average: average(begin.elapsed(), repeats),
        last,
    })
}

fn average(elapsed: Duration, repeats: NonZeroUsize) -> Duration {
    elapsed.div_f64(repeats.get() as f64)
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    #[test]
    fn runs_requested_number_of_times() {
        let mut calls = 0;
        let timed = time_average(NonZeroUsize::new(3).unwrap(), || {
            calls += 1;
            Ok::<_, Infallible>(calls)
        })
        .unwrap();

        assert_eq!(calls, 3);
        assert_eq!(timed.last, 3);
        assert!(timed.seconds() >= 0.0);
    }

    #[test]
    fn average_of_sleeps() {
        let timed = time_average(NonZeroUsize::new(2).unwrap(), || {
            std::thread::sleep(Duration::from_millis(5));
            Ok::<_, Infallible>(())
        })
        .unwrap();

        assert!(timed.average >= Duration::from_millis(5));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn average_of_many_repeats() {
        let repeats = NonZeroUsize::new(1 << 32).unwrap();

        assert_eq!(
            average(Duration::from_secs(1 << 32), repeats),
            Duration::from_secs(1)
        );
        assert_eq!(
            average(Duration::from_secs(6), NonZeroUsize::new(3).unwrap()),
            Duration::from_secs(2)
        );
    }

    #[test]
    fn stops_on_error() {
        let mut calls = 0;
        let result = time_average(NonZeroUsize::new(5).unwrap(), || {
            calls += 1;
            if calls == 2 {
                Err("failed")
            } else {
                Ok(calls)
            }
        });

        assert_eq!(result.unwrap_err(), "failed");
        assert_eq!(calls, 2);
    }
}
