use shared::models::profile_image::initials;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProfileHeaderProps {
    pub display_name: String,
    pub role_label: &'static str,
    pub avatar_url: Option<String>,
}

#[function_component(ProfileHeader)]
pub fn profile_header(props: &ProfileHeaderProps) -> Html {
    let name = if props.display_name.trim().is_empty() {
        "Your profile".to_string()
    } else {
        props.display_name.clone()
    };

    html! {
        <div class="flex items-center space-x-4 mb-6">
            {match &props.avatar_url {
                Some(url) => html! {
                    <img src={url.clone()} alt="Profile" class="w-16 h-16 rounded-full object-cover" />
                },
                None => html! {
                    <div class="w-16 h-16 rounded-full bg-blue-100 text-blue-700 flex items-center justify-center text-xl font-semibold">
                        {initials(&props.display_name)}
                    </div>
                },
            }}
            <div>
                <h1 class="text-2xl font-bold text-gray-900">{name}</h1>
                <p class="text-sm text-gray-500">{props.role_label}</p>
            </div>
        </div>
    }
}
