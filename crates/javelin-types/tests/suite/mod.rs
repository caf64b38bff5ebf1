mod errors;
mod stubs;
