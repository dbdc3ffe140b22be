use std::path::{Path, PathBuf};

use aocr_core::{
    harness::{Harness, RunStatus},
    reporter::{Event, RecordingReporter},
    solution::{from_async_fn, from_fn, try_from_fn},
    status::{Config, ConfigStore, JsonConfigStore, PartRecord},
    Answer, Part, PartSpec, Solutions,
};
use serde_json::Value;
use tempfile::TempDir;

struct Repo {
    dir: TempDir,
    store: JsonConfigStore,
}

impl Repo {
    fn new(initial: &Config) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonConfigStore::new(dir.path().join(".aocr.json"));
        store.save_config(initial).unwrap();
        Self { dir, store }
    }

    fn with_input(self, day: u8, input: &str) -> Self {
        let path = self.day_dir(day).join("input.txt");
        fsutil::write_with_mkdir(path, input).unwrap();
        self
    }

    fn day_dir(&self, day: u8) -> PathBuf {
        self.dir.path().join(format!("src/day{:02}", day))
    }

    fn solution_file(&self, day: u8) -> PathBuf {
        self.day_dir(day).join("main.rs")
    }

    fn raw_status(&self) -> String {
        fsutil::read_to_string(self.store.filepath()).unwrap()
    }

    fn status_json(&self) -> Value {
        serde_json::from_str(&self.raw_status()).unwrap()
    }
}

fn sum_of_ints(input: &str) -> i64 {
    input
        .split_whitespace()
        .map(|x| x.parse::<i64>().unwrap())
        .sum()
}

#[tokio::test]
async fn sums_sample_and_records_part1_only() {
    let repo = Repo::new(&Config::new(Some(2022))).with_input(7, "1 2");
    let before = repo.status_json();
    let reporter = RecordingReporter::default();
    let solutions = Solutions::new().part1(PartSpec::new(from_fn(sum_of_ints)).test("1 2", 3));

    let status = Harness::new(&repo.store, &reporter)
        .run(&solutions, &repo.solution_file(7), None)
        .await
        .unwrap();

    let RunStatus::Completed(summary) = status else {
        panic!("run should complete")
    };
    assert_eq!(summary.day, 7);
    assert_eq!(summary.part1.as_ref().unwrap().result, Answer::Int(3));
    assert!(summary.part2.is_none());

    let events = reporter.events();
    assert_eq!(events.len(), 3);
    assert!(matches!(&events[0], Event::Test(r) if r.index == 1 && r.passed()));
    assert!(matches!(&events[1], Event::Outcome(Part::One, o) if o.result == Answer::Int(3)));
    assert!(matches!(&events[2], Event::TotalTime(t) if *t == summary.total_ms));

    let after = repo.status_json();
    let day7 = &after["days"][6];
    assert_eq!(day7["part1"]["result"], "3");
    assert!(day7["part1"]["time"].is_number());
    assert!(day7["part2"]["result"].is_null());
    assert!(day7["part2"]["time"].is_null());
    for i in (0..25).filter(|&i| i != 6) {
        assert_eq!(after["days"][i], before["days"][i], "day {} changed", i + 1);
    }
    assert_eq!(after["year"], 2022);
}

#[tokio::test]
async fn missing_part_clears_its_previous_record() {
    let mut initial = Config::new(None);
    initial.days[1].part1 = PartRecord::new(Some("stale".into()), Some(12.5));
    let repo = Repo::new(&initial).with_input(2, "abc");
    let reporter = RecordingReporter::default();
    let solutions = Solutions::new().part2(PartSpec::new(from_fn(|s: &str| s.len())));

    Harness::new(&repo.store, &reporter)
        .run(&solutions, &repo.solution_file(2), None)
        .await
        .unwrap();

    let saved = repo.store.read_config().unwrap();
    assert_eq!(saved.days[1].part1, PartRecord::default());
    assert_eq!(saved.days[1].part2.result(), Some("3"));
}

#[tokio::test]
async fn untouched_days_keep_their_exact_text() {
    let repo = Repo::new(&Config::new(None)).with_input(2, "4 5");
    let day1 = r#"{"part1":{"solved":true,"result":"1","attempts":[5],"time":12},"part2":{"result":null,"time":0}}"#;
    let mut raw: Value = repo.status_json();
    raw["days"][0] = serde_json::from_str(day1).unwrap();
    fsutil::write(
        repo.store.filepath(),
        serde_json::to_string_pretty(&raw).unwrap(),
    )
    .unwrap();
    let day1_pretty = serde_json::to_string_pretty(&raw["days"][0]).unwrap();
    let reporter = RecordingReporter::default();

    Harness::new(&repo.store, &reporter)
        .run(
            &Solutions::new().part1(PartSpec::new(from_fn(sum_of_ints))),
            &repo.solution_file(2),
            None,
        )
        .await
        .unwrap();

    let after = repo.status_json();
    assert_eq!(
        serde_json::to_string_pretty(&after["days"][0]).unwrap(),
        day1_pretty
    );
    assert!(repo.raw_status().contains("\"time\": 12"));
    assert_eq!(after["days"][1]["part1"]["result"], "9");
}

#[tokio::test]
async fn fault_in_a_test_leaves_status_untouched() {
    let repo = Repo::new(&Config::new(None)).with_input(5, "real");
    let raw_before = repo.raw_status();
    let reporter = RecordingReporter::default();
    let solutions = Solutions::new().part1(
        PartSpec::new(try_from_fn(|s: &str| s.trim().parse::<i64>())).test("not a number", 1),
    );

    let err = Harness::new(&repo.store, &reporter)
        .run(&solutions, &repo.solution_file(5), None)
        .await
        .unwrap_err();

    assert!(format!("{:#}", err).contains("Part 1, test 1"));
    assert_eq!(repo.raw_status(), raw_before);
    assert!(reporter.events().is_empty());
}

#[tokio::test]
async fn failed_test_does_not_stop_the_run() {
    let repo = Repo::new(&Config::new(None)).with_input(1, "10 20");
    let reporter = RecordingReporter::default();
    let solutions = Solutions::new().part1(
        PartSpec::new(from_fn(sum_of_ints))
            .test("1 1", "2")
            .test("2 2", 4),
    );

    let status = Harness::new(&repo.store, &reporter)
        .run(&solutions, &repo.solution_file(1), None)
        .await
        .unwrap();

    let RunStatus::Completed(summary) = status else {
        panic!("run should complete")
    };
    let verdicts: Vec<_> = summary.tests.iter().map(|r| r.passed()).collect();
    assert_eq!(verdicts, [false, true]);
    assert_eq!(repo.status_json()["days"][0]["part1"]["result"], "30");
}

#[tokio::test]
async fn async_solutions_and_explicit_input() {
    let repo = Repo::new(&Config::new(None));
    let custom_input = repo.dir.path().join("elsewhere.txt");
    fsutil::write(&custom_input, "hello").unwrap();
    let reporter = RecordingReporter::default();
    let solutions = Solutions::new()
        .part1(PartSpec::new(from_async_fn(|s: String| async move {
            tokio::task::yield_now().await;
            anyhow::Ok(s.to_uppercase())
        })))
        .part2(PartSpec::new(from_fn(|_: &str| ())));

    Harness::new(&repo.store, &reporter)
        .run(&solutions, &repo.solution_file(3), Some(custom_input.as_path()))
        .await
        .unwrap();

    let day3 = &repo.status_json()["days"][2];
    assert_eq!(day3["part1"]["result"], "HELLO");
    assert!(day3["part2"]["result"].is_null());
    assert!(day3["part2"]["time"].is_null());
}

#[tokio::test]
async fn default_input_missing_aborts_quietly() {
    let repo = Repo::new(&Config::new(None));
    let raw_before = repo.raw_status();
    let reporter = RecordingReporter::default();

    let status = Harness::new(&repo.store, &reporter)
        .run(
            &Solutions::new().part1(PartSpec::new(from_fn(|_: &str| 0))),
            &repo.solution_file(9),
            None,
        )
        .await
        .unwrap();

    let expected = repo.day_dir(9).join("input.txt");
    assert_eq!(status, RunStatus::AbortedNoInput(expected.clone()));
    assert_eq!(reporter.events(), [Event::MissingInput(expected)]);
    assert_eq!(repo.raw_status(), raw_before);
}

#[tokio::test]
async fn day_beyond_status_slots_is_fatal() {
    let repo = Repo::new(&Config::new(None)).with_input(26, "x");
    let reporter = RecordingReporter::default();

    let err = Harness::new(&repo.store, &reporter)
        .run(
            &Solutions::new().part1(PartSpec::new(from_fn(|_: &str| 0))),
            &repo.solution_file(26),
            None,
        )
        .await
        .unwrap_err();

    assert!(err.to_string().contains("out of range"));
    assert!(reporter.events().is_empty());
}

#[test]
fn dist_layout_reads_input_from_src() {
    let resolver = aocr_core::day::DayResolver::default();
    let loc = resolver
        .resolve(Path::new("/repo/dist/day11/index.js"), None)
        .unwrap();
    assert_eq!(loc.day, 11);
    assert_eq!(loc.input_path, Path::new("/repo/src/day11/input.txt"));
}
