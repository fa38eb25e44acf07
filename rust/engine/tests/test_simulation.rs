use pokersim_engine::logger::HitRecord;
use pokersim_engine::simulation::{simulate, SimulationConfig, StopRule, Target};

#[test]
fn straight_estimate_lands_near_design_value() {
    // 9 straight windows (Ace only high) * 4^5 suit patterns / C(52,5) ~= 0.3546%
    let cfg = SimulationConfig::new(Target::Straight, StopRule::Trials(100_000)).with_seed(7);
    let report = simulate(&cfg, None).unwrap();
    assert_eq!(report.trials, 100_000);
    let pct = report.percentage();
    assert!(pct > 0.25 && pct < 0.47, "straight estimate {}% out of band", pct);
}

#[test]
fn pair_estimate_lands_near_combinatorial_value() {
    // one pair: 1,098,240 / 2,598,960 ~= 42.26%
    let cfg = SimulationConfig::new(Target::Pair, StopRule::Trials(20_000)).with_seed(99);
    let report = simulate(&cfg, None).unwrap();
    let p = report.probability();
    assert!(p > 0.40 && p < 0.445, "pair estimate {} out of band", p);
}

#[test]
fn same_seed_gives_identical_report() {
    let cfg = SimulationConfig::new(Target::Flush, StopRule::Hits(3)).with_seed(31337);
    let a = simulate(&cfg, None).unwrap();
    let b = simulate(&cfg, None).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.seed, 31337);
}

#[test]
fn hits_rule_stops_on_the_nth_event() {
    let cfg = SimulationConfig::new(Target::TwoPair, StopRule::Hits(25)).with_seed(4);
    let mut hits: Vec<HitRecord> = Vec::new();
    let report = simulate(&cfg, Some(&mut hits)).unwrap();
    assert!(report.completed);
    assert_eq!(report.hits, 25);
    assert_eq!(hits.len(), 25);
    // the final trial is the one that produced the last hit
    assert_eq!(hits.last().unwrap().trial, report.trials);
    assert!(report.trials_per_hit().unwrap() >= 1.0);
}

#[test]
fn first_hit_returns_the_winning_hand() {
    let cfg = SimulationConfig::new(Target::Flush, StopRule::FirstHit).with_seed(2);
    let report = simulate(&cfg, None).unwrap();
    assert_eq!(report.hits, 1);
    let first = report.first_hit.expect("flush found");
    assert_eq!(first.trial, report.trials);
    assert!(first.hand.is_flush());
}

#[test]
fn recorded_hits_replay_from_their_seed() {
    use pokersim_engine::deck::Deck;
    use pokersim_engine::hand::Hand;

    let cfg = SimulationConfig::new(Target::Trip, StopRule::Hits(2)).with_seed(500);
    let mut hits: Vec<HitRecord> = Vec::new();
    simulate(&cfg, Some(&mut hits)).unwrap();
    for hit in &hits {
        assert_eq!(hit.seed, 500 + hit.trial - 1);
        let mut deck = Deck::new_with_seed(hit.seed);
        deck.shuffle();
        let hand = Hand::deal(&mut deck).unwrap();
        assert!(hand.is_trip());
        assert_eq!(hand.cards().to_vec(), hit.cards);
    }
}

#[test]
fn max_trials_does_not_cut_a_trials_run() {
    let cfg = SimulationConfig::new(Target::Quad, StopRule::Trials(300))
        .with_seed(1)
        .with_max_trials(10);
    let report = simulate(&cfg, None).unwrap();
    assert_eq!(report.trials, 300);
    assert!(report.completed);
}
