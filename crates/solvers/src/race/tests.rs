use std::time::{Duration, Instant};

use approx::assert_relative_eq;

use descent_core::objective;

use crate::optimizer::{Kind, Optimizer};

use super::{Action, Config, Event, LearningRates, Phase, Race, Status};

fn rates() -> LearningRates {
    LearningRates::default()
}

fn step_n(race: &mut Race, n: usize) {
    for _ in 0..n {
        race.step(&rates(), ());
    }
}

fn final_xs(race: &Race) -> [f64; 3] {
    race.optimizers().each_ref().map(|o| o.trajectory().x())
}

#[test]
fn new_race_is_seeded_and_idle() {
    let race = Race::default();

    assert_eq!(race.iteration(), 0);
    assert_eq!(race.phase(), Phase::Idle);
    assert!(!race.is_animating());
    for kind in Kind::ALL {
        let optimizer = race.optimizer(kind);
        assert_eq!(optimizer.kind(), kind);
        assert_eq!(optimizer, &Optimizer::seed(kind, -7.5));
        assert_eq!(
            optimizer.trajectory().losses(),
            [objective::value(-7.5)]
        );
    }
}

#[test]
fn first_step_matches_sgd_regression() {
    let mut race = Race::default();

    let status = race.step(&rates(), ());

    assert_eq!(status, Status::Advanced);
    assert_eq!(race.phase(), Phase::Stepping);
    let sgd = race.optimizer(Kind::Sgd).trajectory();
    assert_relative_eq!(sgd.x(), -7.485, epsilon = 1e-9);
    assert_relative_eq!(sgd.latest_loss(), objective::value(-7.485), epsilon = 1e-9);
}

#[test]
fn budget_caps_iterations() {
    let mut race = Race::default();

    step_n(&mut race, 50);

    assert_eq!(race.iteration(), 50);
    assert_eq!(race.phase(), Phase::Finished);
    for optimizer in race.optimizers() {
        assert_eq!(optimizer.trajectory().history().len(), 51);
        assert_eq!(optimizer.trajectory().losses().len(), 51);
    }

    let before = final_xs(&race);
    let status = race.step(&rates(), ());

    assert_eq!(status, Status::Exhausted);
    assert_eq!(race.iteration(), 50);
    assert_eq!(final_xs(&race), before);
    assert_eq!(race.optimizer(Kind::Adam).trajectory().history().len(), 51);
}

#[test]
fn zero_budget_never_steps() {
    let config = Config::default().with_max_iters(0);
    let mut race = Race::new(config);

    assert_eq!(race.step(&rates(), ()), Status::Exhausted);
    assert_eq!(race.iteration(), 0);
    assert_eq!(race.phase(), Phase::Finished);

    race.run();
    assert!(!race.is_animating());
}

#[test]
fn observer_receives_steps_in_fixed_order() {
    let mut race = Race::default();
    let mut events: Vec<Event> = Vec::new();

    for _ in 0..3 {
        race.step(&rates(), |event: &Event| {
            events.push(*event);
            None
        });
    }

    assert_eq!(events.len(), 3);
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.iteration, i + 1);
        let kinds = event.steps.map(|step| step.kind);
        assert_eq!(kinds, Kind::ALL);
    }
    let last = events[2];
    for kind in Kind::ALL {
        let trajectory = race.optimizer(kind).trajectory();
        assert_eq!(last.step(kind).point, trajectory.latest());
        assert_eq!(last.losses()[kind.index()], trajectory.latest_loss());
    }
}

#[test]
fn rates_are_read_fresh_each_step() {
    let mut race = Race::default();
    let mut seen = Vec::new();

    race.step(&LearningRates::uniform(0.1), |event: &Event| {
        seen.push(event.step(Kind::Sgd).learning_rate);
        None
    });
    race.step(&LearningRates::uniform(0.05), |event: &Event| {
        seen.push(event.step(Kind::Sgd).learning_rate);
        None
    });

    assert_eq!(seen, vec![0.1, 0.05]);
}

#[test]
fn per_optimizer_rates_are_independent() {
    let mut race = Race::default();
    let mut lone = Optimizer::seed(Kind::Momentum, -7.5);
    let rates = LearningRates {
        sgd: 0.01,
        momentum: 0.2,
        adam: 0.05,
    };

    for _ in 0..10 {
        race.step(&rates, ());
        lone.step(0.2);
    }

    assert_eq!(race.optimizer(Kind::Momentum), &lone);
}

#[test]
fn closure_rate_source_is_accepted() {
    let mut race = Race::default();
    let source = || LearningRates::uniform(0.1);

    race.step(&source, ());

    assert_eq!(race.iteration(), 1);
}

#[test]
fn reset_restores_seeded_state() {
    let pristine = Race::default();
    let mut race = Race::default();

    step_n(&mut race, 17);
    race.run();
    race.reset();

    assert_eq!(race.iteration(), 0);
    assert_eq!(race.phase(), Phase::Idle);
    assert!(!race.is_animating());
    assert_eq!(race.optimizers(), pristine.optimizers());

    race.reset();
    assert_eq!(race.iteration(), 0);
    assert_eq!(race.optimizers(), pristine.optimizers());
}

#[test]
fn reset_after_finishing_allows_a_new_run() {
    let mut race = Race::default();
    step_n(&mut race, 60);
    assert_eq!(race.phase(), Phase::Finished);

    race.reset();
    step_n(&mut race, 5);

    assert_eq!(race.iteration(), 5);
    assert_eq!(race.phase(), Phase::Stepping);
}

#[test]
fn animation_matches_manual_steps() {
    let mut manual = Race::default();
    step_n(&mut manual, 50);

    let mut animated = Race::default();
    let mut sleeps = Vec::new();
    let status = animated.animate(&rates(), (), |delay| sleeps.push(delay));

    assert_eq!(status, Status::Advanced);
    assert_eq!(animated.iteration(), 50);
    assert_eq!(animated.phase(), Phase::Finished);
    assert!(!animated.is_animating());
    assert_eq!(final_xs(&animated), final_xs(&manual));
    assert_eq!(animated.optimizers(), manual.optimizers());

    // No sleep after the final iteration.
    assert_eq!(sleeps.len(), 49);
    assert!(sleeps.iter().all(|d| *d == Duration::from_millis(100)));
}

#[test]
fn ticks_follow_the_delay() {
    let mut race = Race::default();
    let start = Instant::now();
    let delay = race.config().delay();

    assert_eq!(race.tick(start, &rates(), ()), None);

    race.run();
    assert_eq!(race.phase(), Phase::Animating);
    assert_eq!(race.tick(start, &rates(), ()), Some(Status::Advanced));
    assert_eq!(race.next_tick(), Some(start + delay));

    // Not due yet.
    assert_eq!(race.tick(start + delay / 2, &rates(), ()), None);
    assert_eq!(race.iteration(), 1);

    assert_eq!(race.tick(start + delay, &rates(), ()), Some(Status::Advanced));
    assert_eq!(race.iteration(), 2);
}

#[test]
fn ticking_to_completion_matches_manual_steps() {
    let mut manual = Race::default();
    step_n(&mut manual, 50);

    let mut race = Race::default();
    let delay = race.config().delay();
    let mut now = Instant::now();
    race.run();

    // Irregular frame times: some frames land early and are skipped.
    let mut frames = 0;
    while race.is_animating() {
        race.tick(now, &rates(), ());
        now += if frames % 3 == 0 { delay / 3 } else { delay };
        frames += 1;
    }

    assert_eq!(race.iteration(), 50);
    assert_eq!(race.phase(), Phase::Finished);
    assert_eq!(race.optimizers(), manual.optimizers());
}

#[test]
fn stop_cancels_before_next_tick() {
    let mut race = Race::default();
    let now = Instant::now();

    race.run();
    race.tick(now, &rates(), ());
    race.stop();

    assert!(!race.is_animating());
    assert_eq!(race.phase(), Phase::Idle);
    assert_eq!(race.tick(now + Duration::from_secs(10), &rates(), ()), None);
    assert_eq!(race.iteration(), 1);
}

#[test]
fn observer_can_stop_animation() {
    let mut race = Race::default();

    let observer = |event: &Event| (event.iteration == 7).then_some(Action::Stop);
    let status = race.animate(&rates(), observer, |_| {});

    assert_eq!(status, Status::StoppedByObserver);
    assert_eq!(race.iteration(), 7);
    assert_eq!(race.phase(), Phase::Idle);
    assert!(!race.is_animating());
}

#[test]
fn manual_step_during_animation_keeps_animating() {
    let mut race = Race::default();

    race.run();
    race.step(&rates(), ());

    assert!(race.is_animating());
    assert_eq!(race.phase(), Phase::Animating);
}

#[test]
fn manual_steps_reaching_budget_end_animation() {
    let mut race = Race::new(Config::default().with_max_iters(3));

    race.run();
    step_n(&mut race, 3);

    assert_eq!(race.iteration(), 3);
    assert!(!race.is_animating());
    assert_eq!(race.next_tick(), None);
    assert_eq!(race.phase(), Phase::Finished);
    assert_eq!(race.tick(Instant::now(), &rates(), ()), None);
}

#[test]
fn observer_stop_on_manual_step_cancels_animation() {
    let mut race = Race::default();

    race.run();
    let status = race.step(&rates(), |_: &Event| Some(Action::Stop));

    assert_eq!(status, Status::StoppedByObserver);
    assert_eq!(race.iteration(), 1);
    assert!(!race.is_animating());
    assert_eq!(race.phase(), Phase::Stepping);
}

#[test]
fn run_after_budget_is_a_no_op() {
    let mut race = Race::default();
    step_n(&mut race, 50);

    race.run();

    assert!(!race.is_animating());
    assert_eq!(race.phase(), Phase::Finished);
    assert_eq!(race.animate(&rates(), (), |_| {}), Status::Exhausted);
}
