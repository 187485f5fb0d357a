mod lifecycle;
mod scenario;
