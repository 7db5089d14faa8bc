use super::StyleTarget;

pub const TAG_SELECTOR: &str = ".dna-visualization .dna-tag";

pub fn hover_enter(tag: &impl StyleTarget) {
    tag.set_style("transform", "scale(1.1)");
    tag.set_style("z-index", "10");
}

pub fn hover_leave(tag: &impl StyleTarget) {
    tag.remove_style("transform");
    tag.remove_style("z-index");
}
