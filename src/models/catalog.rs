use super::course::Course;

#[derive(Debug)]
pub struct Catalog {
    pub courses: &'static [Course],
    pub courses_map: phf::Map<&'static str, usize>,
}
