use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Minimal deterministic PRNG (splitmix64)
struct SampleRng {
    state: u64,
}

impl SampleRng {
    fn new(seed: u64) -> Self {
        SampleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform jitter in `[-spread, spread]`.
    fn jitter(&mut self, spread: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * spread
    }
}

fn season_code(month: u32) -> u8 {
    match month {
        3..=5 => 1,
        6..=8 => 2,
        9..=11 => 3,
        _ => 4,
    }
}

/// Rough fraction of a day's rentals falling in the given hour: commuter
/// peaks on working days, a single afternoon hump otherwise.
fn hourly_share(hour: u32, working: bool) -> f64 {
    if working {
        match hour {
            7..=9 => 0.09,
            16..=19 => 0.10,
            10..=15 => 0.05,
            6 | 20 | 21 => 0.03,
            _ => 0.01,
        }
    } else {
        match hour {
            10..=17 => 0.08,
            8 | 9 | 18 | 19 => 0.05,
            _ => 0.015,
        }
    }
}

fn main() {
    let mut rng = SampleRng::new(0x00b1_4eda);

    let start = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2012, 12, 31).unwrap();

    let output_path = "all_data.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "dteday",
            "hr",
            "cnt_hourly",
            "cnt_daily",
            "season_daily",
            "workingday_daily",
        ])
        .expect("Failed to write header");

    let mut rows = 0usize;
    let mut day = start;
    while day <= end {
        let season = season_code(day.month());
        let working = !matches!(day.weekday(), Weekday::Sat | Weekday::Sun);

        let base: f64 = match season {
            1 => 4500.0,
            2 => 5600.0,
            3 => 5100.0,
            _ => 3200.0,
        };
        let weekend_factor = if working { 1.0 } else { 0.85 };
        let demand = base * weekend_factor * (1.0 + rng.jitter(0.25));

        let hourly: Vec<u32> = (0..24)
            .map(|hour| {
                let share = hourly_share(hour, working) * (1.0 + rng.jitter(0.3));
                (demand * share).max(0.0).round() as u32
            })
            .collect();
        let cnt_daily: u32 = hourly.iter().sum();

        for (hour, cnt) in hourly.iter().enumerate() {
            writer
                .write_record([
                    day.to_string(),
                    hour.to_string(),
                    cnt.to_string(),
                    cnt_daily.to_string(),
                    season.to_string(),
                    u8::from(working).to_string(),
                ])
                .expect("Failed to write row");
            rows += 1;
        }

        day = day + Days::new(1);
    }

    writer.flush().expect("Failed to flush output file");

    println!("Wrote {rows} hourly rows ({start} to {end}) to {output_path}");
}
