//! Dockerfile rendering

use std::path::Path;

use tokio::fs;

use crate::gradle::{self, GradleInfo};
use crate::util::IoResult;

/// Command line tools archive unpacked into the SDK root
const CMDLINE_TOOLS_URL: &str =
    "https://dl.google.com/android/repository/commandlinetools-linux-8512546_latest.zip";
/// Android platform installed by sdkmanager
const ANDROID_PLATFORM: &str = "platforms;android-32";
/// Android build tools installed by sdkmanager
const ANDROID_BUILD_TOOLS: &str = "build-tools;32.0.0";

/// Render the Dockerfile for the given build parameters.
///
/// Only the Java and Gradle versions go into the output; the dependency
/// list is informational and never rendered.
pub fn render(info: &GradleInfo) -> String {
    let java = &info.java_version;
    let gradle = &info.gradle_version;
    format!(
        r#"# Base image with Java {java}
FROM gradle:{gradle}-jdk{java}

# Set environment variables
ENV ANDROID_SDK_ROOT /opt/android-sdk
ENV PATH $ANDROID_SDK_ROOT/cmdline-tools/tools/bin:$ANDROID_SDK_ROOT/platform-tools:$PATH

# Install the Android command line tools and SDK components
RUN mkdir -p $ANDROID_SDK_ROOT/cmdline-tools && apt-get update && apt-get install -y --no-install-recommends \
    wget unzip lib32stdc++6 lib32z1 && \
    wget {CMDLINE_TOOLS_URL} -O /cmdline-tools.zip && \
    unzip /cmdline-tools.zip -d $ANDROID_SDK_ROOT/cmdline-tools && \
    mv $ANDROID_SDK_ROOT/cmdline-tools/cmdline-tools $ANDROID_SDK_ROOT/cmdline-tools/tools && \
    rm /cmdline-tools.zip && \
    yes | $ANDROID_SDK_ROOT/cmdline-tools/tools/bin/sdkmanager --licenses || true && \
    yes | $ANDROID_SDK_ROOT/cmdline-tools/tools/bin/sdkmanager "platform-tools" "{ANDROID_PLATFORM}" --verbose || true && \
    yes | $ANDROID_SDK_ROOT/cmdline-tools/tools/bin/sdkmanager "{ANDROID_BUILD_TOOLS}" --verbose || true

# Set working directory
WORKDIR /app

# Copy project files
COPY . .

# Preload Gradle dependencies
RUN ./gradlew dependencies --refresh-dependencies

# Default command to build the project
CMD ["./gradlew", "assemble"]
"#
    )
    .trim()
    .to_owned()
}

/// Render and write the Dockerfile, overwriting any existing file.
///
/// Prints a summary of the settings going into the template first.
pub async fn write(info: &GradleInfo, output: &Path) -> IoResult<()> {
    println!("generating Dockerfile with:");
    gradle::print_info(info);
    fs::write(output, render(info)).await?;
    println!("Dockerfile written to '{}'", output.display());
    Ok(())
}
