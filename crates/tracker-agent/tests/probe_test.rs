use test_fixtures::FakeBrowserEnvironment;
use tracker_agent::probe::EnvironmentProbe;
use tracker_core::models::ScreenInfo;

#[test]
fn snapshot_copies_every_navigator_field() {
    let mut env = FakeBrowserEnvironment::new();
    env.navigator.language = "de-DE".to_string();
    env.navigator.vendor = "Vendor GmbH".to_string();
    env.navigator.user_agent = "TestBrowser/9".to_string();
    env.navigator.platform = "FreeBSD amd64".to_string();
    env.navigator.do_not_track = true;
    env.navigator.java = true;
    env.navigator.websocket = false;
    env.navigator.worker = false;
    env.navigator.app_cache = false;

    let snapshot = EnvironmentProbe::gather(&env);

    assert!(snapshot.cookies);
    assert_eq!(snapshot.language, "de-DE");
    assert_eq!(snapshot.vendor, "Vendor GmbH");
    assert_eq!(snapshot.user_agent, "TestBrowser/9");
    assert_eq!(snapshot.platform, "FreeBSD amd64");
    assert!(snapshot.do_not_track);
    assert!(snapshot.java);
    assert!(!snapshot.websocket);
    assert!(!snapshot.worker);
    assert!(!snapshot.app_cache);
}

#[test]
fn gather_twice_is_structurally_equal() {
    let env = FakeBrowserEnvironment::new();
    assert_eq!(EnvironmentProbe::gather(&env), EnvironmentProbe::gather(&env));
}

#[test]
fn missing_screen_surfaces_as_none() {
    let env = FakeBrowserEnvironment::new().with_screen(None);
    let snapshot = EnvironmentProbe::gather(&env);
    assert!(snapshot.screen.is_none());
}

#[test]
fn screen_descriptor_is_carried_through() {
    let env = FakeBrowserEnvironment::new().with_screen(Some(ScreenInfo {
        width: 1366,
        height: 768,
        color_depth: 24,
        pixel_density: 2.0,
    }));

    let screen = EnvironmentProbe::gather(&env).screen.unwrap();

    assert_eq!(screen.width, 1366);
    assert_eq!(screen.height, 768);
    assert_eq!(screen.color_depth, 24);
    assert_eq!(screen.pixel_density, 2.0);
}
