use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use raumklang::{
    preset_by_name, profile_by_name, BandFreq, ImpulseResponse, MediaEvent, Player, PlayerError,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn ready_player() -> Player {
    init_tracing();
    let mut player = Player::new();
    player.create_source();
    player
}

fn short_impulse() -> ImpulseResponse {
    ImpulseResponse::new(vec![0.0; 9600], 2, 48000)
}

#[test]
fn graph_builds_once_and_node_identity_is_stable() {
    let mut player = ready_player();
    assert!(!player.has_graph());

    player.ensure_graph().unwrap();
    assert!(player.has_graph());
    let first: *const _ = player.graph().unwrap();

    // repeated init calls are no-ops and keep node state
    player.set_band_gain(BandFreq::Hz1000, 3.5).unwrap();
    for _ in 0..5 {
        player.ensure_graph().unwrap();
    }
    let again: *const _ = player.graph().unwrap();
    assert_eq!(first, again);
    assert_eq!(player.band_gain(BandFreq::Hz1000).unwrap(), 3.5);
}

#[test]
fn graph_accessors_fail_without_a_source() {
    init_tracing();
    let mut player = Player::new();

    match player.ensure_graph() {
        Err(PlayerError::SourceUninitialized) => {}
        other => panic!("expected SourceUninitialized, got {:?}", other),
    }
    match player.set_band_gain(BandFreq::Hz31, 2.0) {
        Err(PlayerError::SourceUninitialized) => {}
        other => panic!("expected SourceUninitialized, got {:?}", other),
    }
    assert!(!player.has_graph());
}

#[test]
fn mutations_trigger_lazy_construction() {
    let mut player = ready_player();
    assert!(!player.has_graph());

    // a parameter write on an unbuilt graph bootstraps it
    player.set_reverb_source_gain(1.0).unwrap();
    assert!(player.has_graph());
}

#[test]
fn every_band_reads_back_its_written_gain() {
    let mut player = ready_player();
    for (i, band) in BandFreq::ALL.iter().enumerate() {
        let db = i as f32 - 5.0;
        player.set_band_gain(*band, db).unwrap();
        assert_eq!(player.band_gain(*band).unwrap(), db);
    }
}

#[test]
fn band_lookup_by_hertz_validates() {
    let mut player = ready_player();
    player.set_band_gain_hz(8000, 4.0).unwrap();
    assert_eq!(player.band_gain(BandFreq::Hz8000).unwrap(), 4.0);

    match player.set_band_gain_hz(880, 4.0) {
        Err(PlayerError::UnknownBand(880)) => {}
        other => panic!("expected UnknownBand, got {:?}", other),
    }
}

#[test]
fn preset_application_is_commutative() {
    let preset = preset_by_name("electronic").unwrap();

    let mut forward = ready_player();
    forward.apply_preset(preset).unwrap();

    // same gains, written in reverse band order
    let mut reverse = ready_player();
    for band in BandFreq::ALL.iter().rev() {
        reverse.set_band_gain(*band, preset.gain(*band)).unwrap();
    }

    for band in BandFreq::ALL.iter() {
        assert_eq!(
            forward.band_gain(*band).unwrap(),
            reverse.band_gain(*band).unwrap()
        );
    }
}

#[test]
fn rock_preset_matches_the_table() {
    let mut player = ready_player();
    player.apply_preset(preset_by_name("rock").unwrap()).unwrap();
    assert_eq!(player.band_gain(BandFreq::Hz31).unwrap(), 7.0);
    assert_eq!(player.band_gain(BandFreq::Hz8000).unwrap(), 4.0);
}

#[test]
fn loading_an_impulse_applies_the_gain_pair() {
    let mut player = ready_player();
    player.load_impulse(Some(short_impulse()), 1.8, 0.9).unwrap();
    assert!(player.has_impulse().unwrap());
    assert_eq!(player.reverb_source_gain().unwrap(), 1.8);
    assert_eq!(player.reverb_return_gain().unwrap(), 0.9);
}

#[test]
fn clearing_the_impulse_forces_the_dry_path() {
    let mut player = ready_player();
    player.load_impulse(Some(short_impulse()), 1.8, 0.9).unwrap();

    // passed gains are overridden when there is no buffer
    player.load_impulse(None, 0.0, 0.0).unwrap();
    assert!(!player.has_impulse().unwrap());
    assert_eq!(player.reverb_source_gain().unwrap(), 1.0);
    assert_eq!(player.reverb_return_gain().unwrap(), 0.0);
}

#[test]
fn reverb_profile_table_drives_the_stage() {
    let mut player = ready_player();
    let profile = profile_by_name("s2_r4_bd").unwrap();
    player
        .load_impulse(Some(short_impulse()), profile.source_gain, profile.return_gain)
        .unwrap();
    assert_eq!(player.reverb_source_gain().unwrap(), 1.8);
    assert_eq!(player.reverb_return_gain().unwrap(), 0.9);
}

#[test]
fn orbit_ticks_move_the_panner() {
    let mut player = ready_player();
    let t0 = Instant::now();
    player.start_orbit(t0).unwrap();
    assert!(player.is_orbiting());
    assert_eq!(player.orbit_angle(), 0);

    player.poll(t0 + Duration::from_millis(30));
    assert_eq!(player.orbit_angle(), 3);

    let (x, y, z) = player.panner_position().unwrap();
    let rad = 3f32.to_radians();
    let r = player.orbit_radius();
    assert!((x - rad.sin() * r).abs() < 1e-5);
    assert!((y - rad.cos() * r).abs() < 1e-5);
    assert!((z - rad.cos() * r).abs() < 1e-5);
}

#[test]
fn orbit_radius_scales_the_next_write() {
    let mut player = ready_player();
    let t0 = Instant::now();
    player.start_orbit(t0).unwrap();
    player.set_orbit_radius(2.0);

    player.poll(t0 + Duration::from_millis(900));
    let (x, _, _) = player.panner_position().unwrap();
    assert!((x - 90f32.to_radians().sin() * 2.0).abs() < 1e-5);
}

#[test]
fn stop_orbit_zeroes_and_is_idempotent() {
    let mut player = ready_player();
    let t0 = Instant::now();
    player.start_orbit(t0).unwrap();
    player.poll(t0 + Duration::from_millis(50));
    assert_eq!(player.orbit_angle(), 5);

    player.stop_orbit().unwrap();
    assert!(!player.is_orbiting());
    assert_eq!(player.orbit_angle(), 0);
    assert_eq!(player.panner_position().unwrap(), (0.0, 0.0, 0.0));

    // second stop: no error, no timer left behind
    player.stop_orbit().unwrap();
    player.poll(t0 + Duration::from_secs(5));
    assert_eq!(player.orbit_angle(), 0);
    assert_eq!(player.panner_position().unwrap(), (0.0, 0.0, 0.0));
}

#[test]
fn changing_speed_while_orbiting_restarts() {
    let mut player = ready_player();
    let t0 = Instant::now();
    player.start_orbit(t0).unwrap();
    player.poll(t0 + Duration::from_millis(40));
    assert_eq!(player.orbit_angle(), 4);

    let t1 = t0 + Duration::from_millis(40);
    player.set_orbit_speed(2.0, t1);
    assert_eq!(player.orbit_angle(), 0);
    assert_eq!(player.orbit_tick_period(), Duration::from_millis(20));

    player.poll(t1 + Duration::from_millis(20));
    assert_eq!(player.orbit_angle(), 1);
}

#[test]
fn transport_defaults_without_a_source() {
    init_tracing();
    let mut player = Player::new();

    assert!(player.is_empty());
    assert_eq!(player.playback_rate(), 1.0);
    assert_eq!(player.current_time(), 0.0);
    assert_eq!(player.duration(), 0.0);
    assert!(!player.muted());
    assert!(player.error_code().is_none());

    // setters tolerate the missing source
    player.play();
    player.set_volume(0.5);
    player.set_muted(true);
    assert!(!player.muted());
}

#[test]
fn transport_round_trips_through_the_source() {
    let mut player = ready_player();
    player.set_resource("track.ogg");
    assert!(!player.is_empty());

    player.set_playback_rate(1.25);
    assert_eq!(player.playback_rate(), 1.25);

    player.set_current_time(12.5);
    assert_eq!(player.current_time(), 12.5);

    player.set_muted(true);
    assert!(player.muted());

    player.stop();
    assert!(player.is_empty());
    assert_eq!(player.current_time(), 0.0);
}

#[test]
fn event_subscriptions_fire_and_detach() {
    let mut player = ready_player();
    let plays = Rc::new(Cell::new(0u32));
    let ticks = Rc::new(Cell::new(0u32));

    let counter = plays.clone();
    let sub = player
        .on(MediaEvent::Playing, move || counter.set(counter.get() + 1))
        .unwrap();
    let counter = ticks.clone();
    player
        .on(MediaEvent::TimeUpdate, move || counter.set(counter.get() + 1))
        .unwrap();

    player.play();
    player.notify(MediaEvent::TimeUpdate);
    player.notify(MediaEvent::TimeUpdate);
    assert_eq!(plays.get(), 1);
    assert_eq!(ticks.get(), 2);

    player.unsubscribe(sub);
    player.play();
    assert_eq!(plays.get(), 1);
}

#[test]
fn subscription_requires_a_source() {
    init_tracing();
    let mut player = Player::new();
    match player.on(MediaEvent::Playing, || {}) {
        Err(PlayerError::SourceUninitialized) => {}
        other => panic!("expected SourceUninitialized, got {:?}", other),
    }
}

#[test]
fn unknown_output_device_is_rejected() {
    let mut player = ready_player();
    match player.select_output("definitely-not-a-real-device") {
        Err(PlayerError::DeviceUnavailable(name)) => {
            assert_eq!(name, "definitely-not-a-real-device");
        }
        other => panic!("expected DeviceUnavailable, got {:?}", other),
    }
    // selection failure must not disturb existing routing
    assert!(player.graph().unwrap().destination().device_name().is_none());
}
