use capability_chain::utils::logger;
use capability_chain::{say, say_loud, say_mute, Person};

fn main() {
    logger::init_logger();

    Person::new("Kip", say).introduce_yourself();
    Person::new("Kip", say_loud).introduce_yourself();
    Person::new("Kip", say_mute).introduce_yourself();
}
