use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

#[component]
pub fn Avatar(mut props: prim::AvatarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "avatar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Avatar { ..props }
    }
}

#[component]
pub fn AvatarImage(mut props: prim::AvatarImageProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "avatar-image", None, false));

    rsx! {
        prim::AvatarImage { ..props }
    }
}

#[component]
pub fn AvatarFallback(mut props: prim::AvatarFallbackProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "avatar-fallback", None, false));

    rsx! {
        prim::AvatarFallback { ..props }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AvatarSize {
    fn class(&self) -> &'static str {
        match self {
            AvatarSize::Small => "sm",
            AvatarSize::Medium => "md",
            AvatarSize::Large => "lg",
        }
    }
}

/// Photo with an initials fallback while loading or when the image fails.
#[component]
pub fn UserAvatar(
    src: String,
    name: String,
    initials: String,
    #[props(default)] size: AvatarSize,
) -> Element {
    rsx! {
        span { class: "avatar-frame", "data-size": size.class(),
            Avatar {
                AvatarImage { src: src, alt: name }
                AvatarFallback { "{initials}" }
            }
        }
    }
}
