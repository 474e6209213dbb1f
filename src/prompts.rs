pub const SKETCH_USER: &str = include_str!("../data/prompts/sketch_user.txt");
