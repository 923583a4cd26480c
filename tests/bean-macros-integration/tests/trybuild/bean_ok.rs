use bean_macros::Bean;
use di_common::{Autowired, Bean as _};

#[derive(Debug, Default, Bean)]
#[bean]
struct Clock;

#[derive(Debug, Default, Bean)]
#[bean(name = "scheduler")]
struct Scheduler {
    #[autowire]
    clock: Autowired<Clock>,
    interval_ms: u64,
}

fn main() {
    let descriptor = Scheduler::descriptor();
    assert_eq!(descriptor.explicit_name, Some("scheduler"));
    assert_eq!(descriptor.slots.len(), 1);
    assert_eq!(descriptor.slots[0].id, "clock");
    assert_eq!(Clock::descriptor().simple_name, "Clock");
}
