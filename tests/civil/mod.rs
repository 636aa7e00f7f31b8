mod arithmetic;
mod construct;
mod range;
