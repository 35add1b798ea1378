#![cfg(feature = "agents")]

use warden::prelude::*;

/// Lone agent with no target anywhere: the grunt just patrols.
struct Yard {
    pos: Vec2,
    vel: Vec2,
}

impl WorldView for Yard {
    type Agent = u32;

    fn position(&self, agent: u32) -> Option<Vec2> {
        (agent == 0).then_some(self.pos)
    }
}

impl WorldMut for Yard {
    fn set_velocity(&mut self, _agent: u32, velocity: Vec2) {
        self.vel = velocity;
    }
}

impl Roster for Yard {
    fn primary_target(&self) -> Option<u32> {
        None
    }

    fn hostiles(&self) -> Vec<u32> {
        vec![0]
    }
}

#[test]
fn prelude_is_enough_to_drive_a_preset() {
    let route = vec![Vec2::new(0.0, 0.0), Vec2::new(0.0, 50.0)];
    let mut tree: Tree<Yard> = Tree::with_root(Preset::Grunt.build(route, &BehaviorTuning::default()));
    tree.initialize(0);

    let mut yard = Yard {
        pos: Vec2::ZERO,
        vel: Vec2::ZERO,
    };
    for _ in 0..10 {
        assert_eq!(tree.tick(&mut yard, 0.1), BtStatus::Running);
        yard.pos += yard.vel * 0.1;
    }
    assert!(yard.pos.y > 0.0);
    assert!(tree.blackboard().is_empty());
}
