//! Dependency injection with a bare function instead of a trait.

pub type SayFn = Box<dyn Fn(&str)>;

pub fn say(msg: &str) {
    println!("{}", msg);
}

pub fn say_loud(msg: &str) {
    println!("{}", loud(msg));
}

pub fn say_mute(_msg: &str) {}

pub fn loud(msg: &str) -> String {
    msg.to_uppercase()
}

pub struct Person {
    name: String,
    say: SayFn,
}

impl Person {
    pub fn new<F>(name: &str, say: F) -> Self
    where
        F: Fn(&str) + 'static,
    {
        Self {
            name: name.to_string(),
            say: Box::new(say),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn greeting(&self) -> String {
        format!("Hi, my name is {}.", self.name)
    }

    pub fn introduce_yourself(&self) {
        (self.say)(&self.greeting());
    }
}
