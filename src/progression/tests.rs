//! Progression domain: tests for ability parsing and unlock bookkeeping.

use avian2d::prelude::CollisionStart;
use bevy::prelude::*;

use super::{Ability, AbilityFlags, AbilityUnlockedEvent, ProgressionPlugin, UnknownAbility};

#[test]
fn test_ability_flags_default_locked() {
    let flags = AbilityFlags::default();
    for ability in Ability::ALL {
        assert!(!flags.has(ability));
    }
    assert_eq!(flags.unlocked().count(), 0);
}

#[test]
fn test_unlock_is_monotonic() {
    let mut flags = AbilityFlags::default();

    assert!(flags.unlock(Ability::Dash));
    assert!(flags.has(Ability::Dash));

    // Second unlock is a no-op and reports nothing new
    assert!(!flags.unlock(Ability::Dash));
    assert!(flags.has(Ability::Dash));
    assert!(!flags.has(Ability::DoubleJump));
    assert!(!flags.has(Ability::WallJump));
}

#[test]
fn test_with_builder_and_unlocked_iter() {
    let flags = AbilityFlags::default()
        .with(Ability::WallJump)
        .with(Ability::DoubleJump);

    let unlocked: Vec<Ability> = flags.unlocked().collect();
    assert_eq!(unlocked, vec![Ability::DoubleJump, Ability::WallJump]);
    assert_eq!(AbilityFlags::all().unlocked().count(), 3);
}

#[test]
fn test_parse_ability_names() {
    assert_eq!("doublejump".parse::<Ability>(), Ok(Ability::DoubleJump));
    assert_eq!("Dash".parse::<Ability>(), Ok(Ability::Dash));
    assert_eq!(" WallJump ".parse::<Ability>(), Ok(Ability::WallJump));
}

#[test]
fn test_parse_unknown_ability_is_error() {
    let err = "triplejump".parse::<Ability>().unwrap_err();
    assert_eq!(err, UnknownAbility("triplejump".to_string()));
    assert!(err.to_string().contains("triplejump"));
}

#[test]
fn test_ability_name_round_trips_through_display() {
    for ability in Ability::ALL {
        assert_eq!(ability.to_string().parse::<Ability>(), Ok(ability));
    }
}

#[test]
fn test_unlock_announcements_leave_flags_alone() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_message::<CollisionStart>()
        .add_plugins(ProgressionPlugin);

    app.world_mut().resource_mut::<AbilityFlags>().unlock(Ability::Dash);
    app.world_mut().write_message(AbilityUnlockedEvent {
        ability: Ability::Dash,
        collector: None,
    });
    app.update();
    app.update();

    // Announcing reads the unlocked set; only pickups write to it
    let flags = *app.world().resource::<AbilityFlags>();
    assert_eq!(flags, AbilityFlags::default().with(Ability::Dash));
}
